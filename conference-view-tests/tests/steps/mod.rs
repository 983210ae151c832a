mod connection_setup_steps;
mod join_gate_steps;
mod overlay_layout_steps;
mod session_countdown_steps;
mod topic_steps;
mod view_selection_steps;
