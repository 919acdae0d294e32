//! Construction and transformation of clipping-plane sets.

pub use self::cylindrical_planes::cylindrical_planes;
pub use self::mesh_to_planes::{planes_from_mesh, try_planes_from_mesh, PlanesFromMeshError};

mod cylindrical_planes;
mod mesh_to_planes;
pub mod utils;
