//! Integration tests for the media repository: populate joins, filtered
//! listing, pagination windows, serial checks, and reference counts.

use mediateca_core::types::DbId;
use mediateca_db::models::director::DirectorInput;
use mediateca_db::models::genero::GeneroInput;
use mediateca_db::models::media::{CreateMedia, MediaFilter, UpdateMedia};
use mediateca_db::models::productora::ProductoraInput;
use mediateca_db::models::tipo::TipoInput;
use mediateca_db::repositories::{
    DirectorRepo, GeneroRepo, MediaRepo, ProductoraRepo, TipoRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Catalogo {
    genero_id: DbId,
    director_id: DbId,
    productora_id: DbId,
    tipo_id: DbId,
}

/// Create one of each referenced entity.
async fn seed_catalogo(pool: &PgPool) -> Catalogo {
    let genero = GeneroRepo::create(
        pool,
        &GeneroInput {
            nombre: Some("Drama".into()),
            descripcion: Some("Drama films and series".into()),
            estado: Some("activo".into()),
        },
    )
    .await
    .unwrap();

    let director = DirectorRepo::create(
        pool,
        &DirectorInput {
            nombre: Some("Christopher Nolan".into()),
            estado: Some("activo".into()),
        },
    )
    .await
    .unwrap();

    let productora = ProductoraRepo::create(
        pool,
        &ProductoraInput {
            nombre: Some("Warner Bros".into()),
            estado: Some("activo".into()),
            descripcion: Some("Major film studio".into()),
            slogan: Some("The stuff that dreams are made of".into()),
        },
    )
    .await
    .unwrap();

    let tipo = TipoRepo::create(
        pool,
        &TipoInput {
            nombre: Some("Pelicula".into()),
            descripcion: Some("Feature-length films".into()),
        },
    )
    .await
    .unwrap();

    Catalogo {
        genero_id: genero.id,
        director_id: director.id,
        productora_id: productora.id,
        tipo_id: tipo.id,
    }
}

fn new_media(serial: &str, titulo: &str, refs: &Catalogo) -> CreateMedia {
    CreateMedia {
        serial: Some(serial.to_string()),
        titulo: Some(titulo.to_string()),
        sinopsis: Some("A synopsis long enough to satisfy the bounds".to_string()),
        url: Some(format!("https://example.com/{serial}")),
        url_imagen: None,
        anio: Some(2010),
        genero: Some(refs.genero_id),
        director: Some(refs.director_id),
        productora: Some(refs.productora_id),
        tipo: Some(refs.tipo_id),
    }
}

fn empty_update() -> UpdateMedia {
    UpdateMedia {
        serial: None,
        titulo: None,
        sinopsis: None,
        url: None,
        url_imagen: None,
        anio: None,
        estado: None,
        genero: None,
        director: None,
        productora: None,
        tipo: None,
    }
}

// ---------------------------------------------------------------------------
// Create + populate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_populate(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    let media = MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();
    assert_eq!(media.estado, "activo");

    let row = MediaRepo::find_populated(&pool, media.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.genero_nombre.as_deref(), Some("Drama"));
    assert_eq!(row.director_nombre.as_deref(), Some("Christopher Nolan"));
    assert_eq!(row.productora_slogan.as_deref(), Some("The stuff that dreams are made of"));
    assert_eq!(row.tipo_nombre.as_deref(), Some("Pelicula"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_populate_survives_dangling_reference(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    let media = MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();

    // Directors have no delete guard, so the reference can dangle.
    DirectorRepo::delete(&pool, refs.director_id).await.unwrap();

    let row = MediaRepo::find_populated(&pool, media.id)
        .await
        .unwrap()
        .unwrap();
    assert!(row.director_nombre.is_none());
    assert_eq!(row.genero_nombre.as_deref(), Some("Drama"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_serial_rejected_by_index(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();
    let result = MediaRepo::create(&pool, &new_media("SER-001", "Tenet", &refs)).await;

    match result.unwrap_err() {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_medias_serial"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Listing, filters, pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_combine_with_and(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    let otro_genero = GeneroRepo::create(
        &pool,
        &GeneroInput {
            nombre: Some("Comedia".into()),
            descripcion: Some("Comedy films and series".into()),
            estado: Some("activo".into()),
        },
    )
    .await
    .unwrap();

    MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();
    let mut en_comedia = new_media("SER-002", "Superbad", &refs);
    en_comedia.genero = Some(otro_genero.id);
    MediaRepo::create(&pool, &en_comedia).await.unwrap();

    let filter = MediaFilter {
        genero: Some(refs.genero_id),
        director: Some(refs.director_id),
        tipo: None,
    };
    let rows = MediaRepo::list(&pool, &filter, 10, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].media.serial, "SER-001");
    assert_eq!(MediaRepo::count(&pool, &filter).await.unwrap(), 1);

    let sin_filtro = MediaFilter::default();
    assert_eq!(MediaRepo::count(&pool, &sin_filtro).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination_window(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    for i in 0..7 {
        MediaRepo::create(&pool, &new_media(&format!("SER-{i:03}"), "Inception", &refs))
            .await
            .unwrap();
    }

    let filter = MediaFilter::default();
    let first = MediaRepo::list(&pool, &filter, 5, 0).await.unwrap();
    let second = MediaRepo::list(&pool, &filter, 5, 5).await.unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 2);
    assert_eq!(MediaRepo::count(&pool, &filter).await.unwrap(), 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_genero_filters_estado_and_sorts_by_titulo(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    MediaRepo::create(&pool, &new_media("SER-001", "Tenet", &refs))
        .await
        .unwrap();
    MediaRepo::create(&pool, &new_media("SER-002", "Inception", &refs))
        .await
        .unwrap();
    let inactiva = MediaRepo::create(&pool, &new_media("SER-003", "Dunkirk", &refs))
        .await
        .unwrap();

    let mut update = empty_update();
    update.estado = Some("inactivo".into());
    MediaRepo::update(&pool, inactiva.id, &update)
        .await
        .unwrap()
        .unwrap();

    let rows = MediaRepo::list_by_genero(&pool, refs.genero_id, 10, 0)
        .await
        .unwrap();
    let titulos: Vec<_> = rows.iter().map(|r| r.media.titulo.as_str()).collect();
    assert_eq!(titulos, ["Inception", "Tenet"]);
    assert_eq!(
        MediaRepo::count_by_genero_activo(&pool, refs.genero_id)
            .await
            .unwrap(),
        2
    );
}

// ---------------------------------------------------------------------------
// Serial checks and reference counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_serial_checks(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    let media = MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();

    assert!(MediaRepo::serial_exists(&pool, "SER-001").await.unwrap());
    assert!(!MediaRepo::serial_exists(&pool, "SER-999").await.unwrap());

    // The owning document does not count as "another" holder.
    assert!(!MediaRepo::serial_taken_by_other(&pool, "SER-001", media.id)
        .await
        .unwrap());
    assert!(MediaRepo::serial_taken_by_other(&pool, "SER-001", media.id + 1)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reference_counts(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    assert_eq!(
        MediaRepo::count_by_genero(&pool, refs.genero_id).await.unwrap(),
        0
    );

    let media = MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();
    assert_eq!(
        MediaRepo::count_by_genero(&pool, refs.genero_id).await.unwrap(),
        1
    );
    assert_eq!(
        MediaRepo::count_by_tipo(&pool, refs.tipo_id).await.unwrap(),
        1
    );

    MediaRepo::delete(&pool, media.id).await.unwrap();
    assert_eq!(
        MediaRepo::count_by_genero(&pool, refs.genero_id).await.unwrap(),
        0
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_applies_only_provided_fields(pool: PgPool) {
    let refs = seed_catalogo(&pool).await;
    let media = MediaRepo::create(&pool, &new_media("SER-001", "Inception", &refs))
        .await
        .unwrap();

    let mut update = empty_update();
    update.anio = Some(2000);
    let updated = MediaRepo::update(&pool, media.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.anio, 2000);
    assert_eq!(updated.titulo, "Inception");
    assert_eq!(updated.serial, "SER-001");
    assert!(updated.fecha_actualizacion >= media.fecha_actualizacion);
}
