use std::path::{Path, PathBuf};

use anyhow::Context;
use comicnet_client::{
    api::{
        self, Author, CommentId, ContentType, NewComment, NotificationDraft, NotificationId,
        NotificationType, ThemeMode,
    },
    AppContext, DbDump, FileStore, NotificationCenter,
};

#[derive(structopt::StructOpt)]
struct Opt {
    /// JSON file holding comments and notifications
    #[structopt(long, env = "COMICNET_STATE", default_value = "comicnet-state.json")]
    state: PathBuf,

    /// JSON file holding user preferences
    #[structopt(long, env = "COMICNET_PREFS", default_value = "comicnet-prefs.json")]
    prefs: PathBuf,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Show or add comments
    Comments(CommentsCmd),

    /// Inspect and update notifications
    Notifications(NotificationsCmd),

    /// Show or change the theme
    Theme(ThemeCmd),
}

#[derive(structopt::StructOpt)]
enum CommentsCmd {
    /// Print the comment tree
    Show,

    /// Post a comment, or a reply to any comment
    Add {
        /// Username of the poster
        author: String,

        text: String,

        /// Comment to reply to
        #[structopt(long)]
        parent: Option<String>,
    },

    /// Like or unlike a comment
    Like { id: String },
}

#[derive(structopt::StructOpt)]
enum NotificationsCmd {
    /// Print all notifications, newest first
    List,

    /// Print one line per notification group
    Groups,

    /// Print the number of unread notifications
    Unread,

    /// Add a notification
    Add {
        /// like, comment, follow, mention, system or vote
        #[structopt(name = "type")]
        notification_type: NotificationType,

        title: String,

        message: String,

        /// comic, post or idea
        #[structopt(long)]
        content_type: Option<ContentType>,

        #[structopt(long)]
        content_id: Option<String>,

        #[structopt(long)]
        group_id: Option<String>,

        #[structopt(long)]
        avatar: Option<String>,
    },

    /// Mark notifications as read
    Read {
        #[structopt(required = true)]
        ids: Vec<String>,
    },

    /// Mark every notification as read
    ReadAll,

    /// Mark every notification of a group as read
    ReadGroup { key: String },

    /// Remove one notification
    Remove { id: String },

    /// Remove all notifications
    Clear,
}

#[derive(structopt::StructOpt)]
enum ThemeCmd {
    Show,
    Set { mode: ThemeMode },
    Toggle,
}

async fn load_db(path: &Path) -> anyhow::Result<DbDump> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => DbDump::from_json(&json).with_context(|| format!("loading {:?}", path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DbDump::stub()),
        Err(e) => Err(e).with_context(|| format!("reading {:?}", path)),
    }
}

async fn save_db(path: &Path, db: &DbDump) -> anyhow::Result<()> {
    tokio::fs::write(path, db.to_json()?)
        .await
        .with_context(|| format!("writing {:?}", path))
}

fn print_comments(db: &DbDump) {
    println!("{} comments", db.comments.comment_count());
    for (depth, c) in db.comments.walk() {
        let liked = if c.liked_by_viewer { "*" } else { " " };
        println!(
            "{:indent$}{liked}[{}] {} ({}, {} likes): {}",
            "",
            c.id,
            c.author.username,
            c.created_at,
            c.like_count,
            c.body,
            indent = depth * 2,
        );
    }
}

fn print_notification(n: &api::Notification) {
    let read = if n.read { " " } else { "*" };
    println!(
        "{read}[{}] {} {}: {} ({})",
        n.id, n.notification_type, n.title, n.message, n.timestamp
    );
}

fn run_comments(cmd: CommentsCmd, db: &mut DbDump) -> anyhow::Result<bool> {
    match cmd {
        CommentsCmd::Show => {
            print_comments(db);
            Ok(false)
        }
        CommentsCmd::Add {
            author,
            text,
            parent,
        } => {
            api::validate_string(&author).context("validating author")?;
            api::validate_body(&text).context("validating comment text")?;
            let new = NewComment::now(Author::new(author), text);
            let id = new.id.clone();
            let parent = parent.map(CommentId);
            let before = db.comments.comment_count();
            db.comments = db.comments.insert_comment(new, parent.as_ref());
            if db.comments.comment_count() == before {
                tracing::warn!(?parent, "no such parent comment, nothing posted");
                if let Some(parent) = parent {
                    eprintln!("no comment with id {parent}, nothing posted");
                }
                return Ok(false);
            }
            println!("{id}");
            Ok(true)
        }
        CommentsCmd::Like { id } => {
            let id = CommentId(id);
            db.comments = db.comments.toggle_like(&id);
            match db.comments.find(&id) {
                Some(c) => {
                    println!("{} likes", c.like_count);
                    Ok(true)
                }
                None => {
                    eprintln!("no comment with id {id}");
                    Ok(false)
                }
            }
        }
    }
}

fn run_notifications(cmd: NotificationsCmd, center: &mut NotificationCenter) -> bool {
    match cmd {
        NotificationsCmd::List => {
            center.list().iter().for_each(print_notification);
            false
        }
        NotificationsCmd::Groups => {
            for g in center.groups() {
                println!(
                    "{} ({} total, {} unread), latest: {}",
                    g.key, g.count, g.unread, g.latest.title
                );
            }
            false
        }
        NotificationsCmd::Unread => {
            println!("{}", center.unread_count());
            false
        }
        NotificationsCmd::Add {
            notification_type,
            title,
            message,
            content_type,
            content_id,
            group_id,
            avatar,
        } => {
            let id = center.add(NotificationDraft {
                notification_type,
                title,
                message,
                avatar,
                content_id,
                content_type,
                group_id,
            });
            println!("{id}");
            true
        }
        NotificationsCmd::Read { ids } => {
            let ids = ids.into_iter().map(NotificationId).collect::<Vec<_>>();
            center.mark_many_read(&ids);
            true
        }
        NotificationsCmd::ReadAll => {
            center.mark_all_read();
            true
        }
        NotificationsCmd::ReadGroup { key } => {
            center.mark_group_read(&key);
            true
        }
        NotificationsCmd::Remove { id } => {
            center.remove(&NotificationId(id));
            true
        }
        NotificationsCmd::Clear => {
            center.clear();
            true
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let mut db = load_db(&opt.state).await?;
    let mut ctx = AppContext::init(
        FileStore::new(opt.prefs.clone()),
        std::mem::take(&mut db.notifications),
    )
    .await;

    let changed = match opt.cmd {
        Command::Comments(cmd) => run_comments(cmd, &mut db)?,
        Command::Notifications(cmd) => run_notifications(cmd, &mut ctx.notifications),
        Command::Theme(ThemeCmd::Show) => {
            println!("{}", ctx.theme.mode());
            false
        }
        Command::Theme(ThemeCmd::Set { mode }) => {
            ctx.theme.set_mode(mode).await;
            println!("{}", ctx.theme.mode());
            false
        }
        Command::Theme(ThemeCmd::Toggle) => {
            println!("{}", ctx.theme.toggle().await);
            false
        }
    };

    db.notifications = ctx.teardown();
    if changed {
        save_db(&opt.state, &db).await?;
        tracing::info!(path = ?opt.state, "saved state");
    }

    Ok(())
}
