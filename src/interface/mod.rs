pub mod prompts;
pub mod render;

pub use prompts::{
    collect_attempt, prompt_cook_time, prompt_ingredients, prompt_method, prompt_pleats,
    prompt_yes_no, CollectStyle,
};
pub use render::{display_order, display_round_header, display_session_summary, display_verdict};
