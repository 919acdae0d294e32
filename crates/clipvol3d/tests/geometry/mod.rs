mod cylindrical_planes;
mod planes_from_mesh;
