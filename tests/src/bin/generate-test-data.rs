use chrono::{Duration, Utc};
use comicnet_api::{
    format_timestamp, Author, Comment, CommentId, ContentType, NewComment, Notification,
    NotificationDraft, NotificationId, NotificationType,
};
use comicnet_client::DbDump;
use rand::{seq::SliceRandom, Rng};

const NUM_USERS: usize = 8;

const NUM_TOP_COMMENTS: usize = 20;
const MAX_REPLIES: usize = 4;
const MAX_DEPTH: usize = 3;
const COMMENT_WORD_COUNT: usize = 12;

const NUM_NOTIFICATIONS: usize = 60;
const NUM_CONTENTS: usize = 6;

// Going back further than this from now when picking timestamps
const MAX_AGE_MINUTES: i64 = 60 * 24 * 14;

fn gen_timestamp(rng: &mut impl Rng) -> String {
    let age = Duration::minutes(rng.gen_range(0..MAX_AGE_MINUTES));
    format_timestamp(&(Utc::now() - age))
}

fn gen_comment(rng: &mut impl Rng, users: &[Author], depth: usize) -> Comment {
    let mut c = Comment::from(NewComment {
        id: CommentId::generate(),
        author: users.choose(rng).cloned().unwrap_or_else(|| Author::new("anon")),
        body: lipsum::lipsum_words(rng.gen_range(1..=COMMENT_WORD_COUNT)),
        created_at: gen_timestamp(rng),
    });
    c.liked_by_viewer = rng.gen_bool(0.2);
    c.like_count = rng.gen_range(0..50) + u64::from(c.liked_by_viewer);
    if depth < MAX_DEPTH {
        for _ in 0..rng.gen_range(0..=MAX_REPLIES / (depth + 1)) {
            c.replies.push_back(gen_comment(rng, users, depth + 1));
        }
    }
    c
}

fn gen_notification(
    rng: &mut impl Rng,
    users: &[Author],
    contents: &[(ContentType, String)],
) -> Notification {
    let user = users.choose(rng).cloned().unwrap_or_else(|| Author::new("anon"));
    let notification_type = *NotificationType::ALL
        .choose(rng)
        .unwrap_or(&NotificationType::System);
    let (title, verb) = match notification_type {
        NotificationType::Like => ("New like", "liked"),
        NotificationType::Comment => ("New comment", "commented on"),
        NotificationType::Follow => ("New follower", "followed"),
        NotificationType::Mention => ("Mention", "mentioned you in"),
        NotificationType::System => ("Announcement", "published"),
        NotificationType::Vote => ("New vote", "voted on"),
    };
    let mut draft = NotificationDraft::new(
        notification_type,
        title,
        format!("{} {} {}", user.username, verb, lipsum::lipsum_words(3)),
    );
    draft.avatar = user.avatar.clone();
    if !matches!(notification_type, NotificationType::Follow | NotificationType::System) {
        if let Some((content_type, content_id)) = contents.choose(rng) {
            draft = draft.about(*content_type, content_id.clone());
        }
    }
    let mut n = Notification::from_draft(draft, NotificationId::generate(), gen_timestamp(rng));
    n.read = rng.gen_bool(0.5);
    n
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();

    let users = (0..NUM_USERS)
        .map(|i| {
            let name = lipsum::lipsum_words(1).to_lowercase();
            let name = name.trim_end_matches(|c: char| !c.is_alphanumeric());
            Author::new(format!("{name}{i}"))
                .with_avatar(format!("https://example.invalid/avatars/{i}.png"))
        })
        .collect::<Vec<_>>();

    let contents = (0..NUM_CONTENTS)
        .map(|i| {
            let content_type = *[ContentType::Comic, ContentType::Post, ContentType::Idea]
                .choose(&mut rng)
                .unwrap_or(&ContentType::Comic);
            (content_type, i.to_string())
        })
        .collect::<Vec<_>>();

    let mut db = DbDump::stub();
    db.add_comments(
        (0..NUM_TOP_COMMENTS)
            .map(|_| gen_comment(&mut rng, &users, 0))
            .collect(),
    );

    let mut notifications = (0..NUM_NOTIFICATIONS)
        .map(|_| gen_notification(&mut rng, &users, &contents))
        .collect::<Vec<_>>();
    notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    db.add_notifications(notifications);

    println!("{}", db.to_json()?);
    Ok(())
}
