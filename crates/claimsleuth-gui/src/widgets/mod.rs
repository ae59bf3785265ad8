/// UI widgets for ClaimSleuth.
pub mod bar_chart;
pub mod count_table;
pub mod metric;
pub mod pie_chart;
pub mod status_bar;
pub mod toolbar;
