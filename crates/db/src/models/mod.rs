pub mod director;
pub mod genero;
pub mod media;
pub mod productora;
pub mod tipo;
