pub mod kpi_card;
pub mod map_view;
pub mod result_panel;
pub mod toast;
