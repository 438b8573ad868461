mod make_box;
mod make_hexahedron;
mod make_prism;

pub use make_box::MakeBox;
pub use make_hexahedron::{MakeHexahedron, HEXAHEDRON_FACES};
pub use make_prism::{MakePrism, PRISM_FACES};
