pub mod gesture_row;
