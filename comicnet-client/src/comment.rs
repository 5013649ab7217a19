use crate::api::{Comment, CommentId, NewComment};

/// All the comments posted under one piece of content
///
/// Every operation returns a new tree. Untouched branches are shared with the
/// previous tree, so holding on to an old tree is cheap and never observes
/// later changes.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "im::Vector<Comment>", into = "im::Vector<Comment>")]
pub struct CommentTree {
    comments: im::Vector<Comment>,

    /// What comment headers display; bumped on every successful insertion
    comment_count: usize,
}

impl From<im::Vector<Comment>> for CommentTree {
    fn from(comments: im::Vector<Comment>) -> CommentTree {
        let comment_count = comments.iter().map(Comment::count_with_replies).sum();
        CommentTree {
            comments,
            comment_count,
        }
    }
}

impl From<CommentTree> for im::Vector<Comment> {
    fn from(t: CommentTree) -> im::Vector<Comment> {
        t.comments
    }
}

impl FromIterator<Comment> for CommentTree {
    fn from_iter<I: IntoIterator<Item = Comment>>(iter: I) -> CommentTree {
        CommentTree::from(iter.into_iter().collect::<im::Vector<Comment>>())
    }
}

impl CommentTree {
    pub fn new() -> CommentTree {
        CommentTree::default()
    }

    /// Top-level comments, in posting order
    pub fn comments(&self) -> &im::Vector<Comment> {
        &self.comments
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        Comment::find_in(&self.comments, id)
    }

    pub fn comment_count(&self) -> usize {
        self.comment_count
    }

    /// Counts comments at every depth by walking the tree
    pub fn count_all(&self) -> usize {
        self.comments.iter().map(Comment::count_with_replies).sum()
    }

    /// Adds `new` at the end of the top level, or at the end of the replies of
    /// `parent_id` wherever it sits in the tree
    ///
    /// If `parent_id` matches no comment, the tree is returned unchanged.
    pub fn insert_comment(&self, new: NewComment, parent_id: Option<&CommentId>) -> CommentTree {
        let mut new = Some(Comment::from(new));
        let comments = match parent_id {
            None => {
                let mut comments = self.comments.clone();
                comments.extend(new.take());
                comments
            }
            Some(parent_id) => {
                let appended = update_in(&self.comments, parent_id, &mut |parent: &mut Comment| {
                    parent.replies.extend(new.take())
                });
                match appended {
                    Some(comments) => comments,
                    None => return self.clone(),
                }
            }
        };
        tracing::trace!(parent = ?parent_id, "inserted comment");
        CommentTree {
            comments,
            comment_count: self.comment_count + 1,
        }
    }

    /// Flips the viewer's like on `id`, wherever it sits in the tree
    pub fn toggle_like(&self, id: &CommentId) -> CommentTree {
        let toggled = update_in(&self.comments, id, &mut |c: &mut Comment| {
            if c.liked_by_viewer {
                c.like_count = c.like_count.saturating_sub(1);
            } else {
                c.like_count += 1;
            }
            c.liked_by_viewer = !c.liked_by_viewer;
        });
        match toggled {
            Some(comments) => CommentTree {
                comments,
                comment_count: self.comment_count,
            },
            None => self.clone(),
        }
    }

    /// Depth-first walk, yielding every comment along with its depth (0 for
    /// top-level comments)
    pub fn walk(&self) -> Vec<(usize, &Comment)> {
        fn walk_into<'a>(
            comments: &'a im::Vector<Comment>,
            depth: usize,
            res: &mut Vec<(usize, &'a Comment)>,
        ) {
            for c in comments.iter() {
                res.push((depth, c));
                walk_into(&c.replies, depth + 1, res);
            }
        }
        let mut res = Vec::with_capacity(self.comment_count);
        walk_into(&self.comments, 0, &mut res);
        res
    }
}

/// Applies `f` to the first comment (depth-first) with id `id`, and returns
/// the rebuilt sequence, or `None` if there is no such comment
///
/// Only the path from `comments` down to the updated comment is copied.
fn update_in<F>(
    comments: &im::Vector<Comment>,
    id: &CommentId,
    f: &mut F,
) -> Option<im::Vector<Comment>>
where
    F: FnMut(&mut Comment),
{
    for (i, c) in comments.iter().enumerate() {
        if c.id == *id {
            let mut c = c.clone();
            f(&mut c);
            return Some(comments.update(i, c));
        }
        if let Some(replies) = update_in(&c.replies, id, f) {
            let mut c = c.clone();
            c.replies = replies;
            return Some(comments.update(i, c));
        }
    }
    None
}
