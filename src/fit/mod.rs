/// Eye-driven scale, rotation and anchor solving.
pub mod solver;
