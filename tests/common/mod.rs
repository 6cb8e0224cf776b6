#![allow(dead_code)] // shared across test binaries; not every binary uses everything

use sea_orm::{ActiveValue::Set, ActiveModelTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

use filterkit::Searchable;
use filterkit::domain::{
    ConiferousSpecification, DeciduousSpecification, Plant, PlantSpecification, Post,
};
use filterkit::filter::PostFilter;
use filterkit::registry::{Registry, TranslateFn};
use filterkit::translate::post_translators;

pub mod post_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "post")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(column_type = "Text")]
        pub title: String,
        pub author_id: Uuid,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod post_tag_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "post_tag")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub post_id: Uuid,
        #[sea_orm(primary_key, auto_increment = false)]
        #[sea_orm(column_type = "Text")]
        pub tag: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Searchable resource binding post filters to the test entity.
pub struct PostResource;

impl Searchable for PostResource {
    type EntityType = post_entity::Entity;
    type Filter = PostFilter;

    fn translators() -> &'static Registry<TranslateFn<PostFilter>> {
        post_translators()
    }
}

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Persist a post read model as one `post` row plus one `post_tag` row per
/// tag, mirroring the schema the translators compile against.
pub async fn insert_post(db: &DatabaseConnection, post: &Post) -> Result<(), DbErr> {
    post_entity::ActiveModel {
        id: Set(post.id),
        title: Set(post.title.clone()),
        author_id: Set(post.author_id),
    }
    .insert(db)
    .await?;

    for tag in &post.tags {
        post_tag_entity::ActiveModel {
            post_id: Set(post.id),
            tag: Set(tag.clone()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreatePostTables)]
    }
}

pub struct CreatePostTables;

#[async_trait::async_trait]
impl MigrationName for CreatePostTables {
    fn name(&self) -> &'static str {
        "m20250101_000001_create_post_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreatePostTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let post = Table::create()
            .table(post_entity::Entity)
            .if_not_exists()
            .col(
                ColumnDef::new(post_entity::Column::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(post_entity::Column::Title).string().not_null())
            .col(ColumnDef::new(post_entity::Column::AuthorId).uuid().not_null())
            .to_owned();
        manager.create_table(post).await?;

        let post_tag = Table::create()
            .table(post_tag_entity::Entity)
            .if_not_exists()
            .col(ColumnDef::new(post_tag_entity::Column::PostId).uuid().not_null())
            .col(ColumnDef::new(post_tag_entity::Column::Tag).string().not_null())
            .primary_key(
                Index::create()
                    .col(post_tag_entity::Column::PostId)
                    .col(post_tag_entity::Column::Tag),
            )
            .to_owned();
        manager.create_table(post_tag).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(post_tag_entity::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(post_entity::Entity).to_owned())
            .await?;
        Ok(())
    }
}

// Deterministic fixture ids so test failures print recognizable values.

pub fn author_a() -> Uuid {
    Uuid::from_u128(0xA1)
}

pub fn author_b() -> Uuid {
    Uuid::from_u128(0xB2)
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: Uuid::from_u128(1),
            title: "Growing Tomatoes Indoors".to_string(),
            tags: vec!["gardening".to_string(), "vegetables".to_string()],
            author_id: author_a(),
        },
        Post {
            id: Uuid::from_u128(2),
            title: "Winter pruning basics".to_string(),
            tags: vec!["gardening".to_string(), "trees".to_string()],
            author_id: author_b(),
        },
        Post {
            id: Uuid::from_u128(3),
            title: "A tomato soup recipe".to_string(),
            tags: vec!["cooking".to_string()],
            author_id: author_a(),
        },
        Post {
            id: Uuid::from_u128(4),
            title: "Untagged thoughts".to_string(),
            tags: vec![],
            author_id: author_b(),
        },
    ]
}

pub fn pine() -> Plant {
    Plant {
        id: Uuid::from_u128(0x10),
        name: "Scots Pine".to_string(),
        latin_name: "Pinus sylvestris".to_string(),
        category: "tree".to_string(),
        specification: PlantSpecification::Coniferous(ConiferousSpecification {
            height_m: 25.0,
            diameter_m: 6.0,
            soil_acidity: 5,
            soil_moisture: "low".to_string(),
            light_relation: "full_sun".to_string(),
            soil_type: "sandy".to_string(),
            winter_hardiness: 2,
        }),
    }
}

pub fn oak() -> Plant {
    Plant {
        id: Uuid::from_u128(0x11),
        name: "English Oak".to_string(),
        latin_name: "Quercus robur".to_string(),
        category: "tree".to_string(),
        specification: PlantSpecification::Deciduous(DeciduousSpecification {
            height_m: 7.5,
            diameter_m: 4.0,
            flowering_period: "spring".to_string(),
            soil_acidity: 7,
            soil_moisture: "medium".to_string(),
            light_relation: "partial_shade".to_string(),
            soil_type: "loam".to_string(),
            winter_hardiness: 4,
        }),
    }
}

pub fn lilac() -> Plant {
    Plant {
        id: Uuid::from_u128(0x12),
        name: "Common Lilac".to_string(),
        latin_name: "Syringa vulgaris".to_string(),
        category: "shrub".to_string(),
        specification: PlantSpecification::Deciduous(DeciduousSpecification {
            height_m: 5.0,
            diameter_m: 3.0,
            flowering_period: "early_summer".to_string(),
            soil_acidity: 6,
            soil_moisture: "medium".to_string(),
            light_relation: "full_sun".to_string(),
            soil_type: "loam".to_string(),
            winter_hardiness: 3,
        }),
    }
}
