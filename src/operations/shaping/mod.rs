mod extrude;

pub use extrude::ExtrudeBoard;
