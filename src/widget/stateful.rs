pub mod radio_group_widget;
