//! Page components for Inkstream.

mod add_post;
mod all_posts;
mod edit_post;
mod explore;
mod home;
mod login;
mod post_view;
mod profile;
mod profile_edit;
mod signup;
mod verify_pending;

pub use add_post::AddPost;
pub use all_posts::AllPosts;
pub use edit_post::EditPost;
pub use explore::Explore;
pub use home::Home;
pub use login::Login;
pub use post_view::PostView;
pub use profile::Profile;
pub use profile_edit::ProfileEdit;
pub use signup::Signup;
pub use verify_pending::VerifyPending;
