pub mod director_repo;
pub mod genero_repo;
pub mod media_repo;
pub mod productora_repo;
pub mod tipo_repo;

pub use director_repo::DirectorRepo;
pub use genero_repo::GeneroRepo;
pub use media_repo::MediaRepo;
pub use productora_repo::ProductoraRepo;
pub use tipo_repo::TipoRepo;
