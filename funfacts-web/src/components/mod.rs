pub mod fact_section;
pub mod fact_widget;
pub mod toolbar;
