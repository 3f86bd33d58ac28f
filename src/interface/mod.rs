pub mod prompts;
pub mod render;

pub use prompts::{
    collect_preferences, find_food, prompt_budget, prompt_location, prompt_protein_goal,
    prompt_restrictions,
};
pub use render::{
    display_analysis, display_food_details, display_insights, display_recommendations,
    display_shortlist, display_summary,
};
