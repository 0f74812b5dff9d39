//! Randomized seed data for test suites.

use rand::Rng;
use rand::seq::IndexedRandom;

use blog_core::domain::{Author, BlogPost, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Barbara", "Edsger", "Margaret", "Donald",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Hamilton", "Knuth",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
];

/// Build one draft with random author and lorem-style text.
pub fn generate_draft() -> PostDraft {
    let mut rng = rand::rng();

    let title_len = rng.random_range(2..=5);
    let content_len = rng.random_range(8..=24);
    let title = sentence(&mut rng, title_len);
    let content = sentence(&mut rng, content_len);

    PostDraft {
        title,
        content: format!("{content}."),
        author: Author {
            first_name: pick(&mut rng, FIRST_NAMES).to_string(),
            last_name: pick(&mut rng, LAST_NAMES).to_string(),
        },
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, list: &[&'static str]) -> &'static str {
    list.choose(rng).copied().unwrap_or("lorem")
}

fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    (0..words)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert `count` generated posts and return them as stored.
pub async fn seed_posts(
    repo: &dyn BlogPostRepository,
    count: usize,
) -> Result<Vec<BlogPost>, RepoError> {
    tracing::info!(count, "Seeding blog post data");

    let mut posts = Vec::with_capacity(count);
    for _ in 0..count {
        posts.push(repo.insert(generate_draft()).await?);
    }
    Ok(posts)
}

/// Remove every stored post.
pub async fn tear_down(repo: &dyn BlogPostRepository) -> Result<(), RepoError> {
    tracing::warn!("Deleting all blog posts");

    for post in repo.find_all().await? {
        repo.remove_by_id(post.id).await?;
    }
    Ok(())
}
