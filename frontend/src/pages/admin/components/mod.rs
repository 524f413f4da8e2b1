pub mod add_student;
pub mod schedule_editor;
pub mod student_grid;
