//! Social behavior: rivalries, table chat, inside jokes, and posting
//! habits.

pub mod behavior;
pub mod chat;
pub mod rivalry;

pub use behavior::{
    Anniversary, CONTENT_TOPICS, DEFAULT_FATIGUE_THRESHOLD, FollowerMilestone, FollowerPolish,
    PolishLevel, alternative_topic, check_anniversary, check_follower_milestone, follower_polish,
    has_content_fatigue, post_age_engagement_mod, should_engage_with_post,
};
pub use chat::should_use_inside_joke;
pub use rivalry::SoftplayModifier;
