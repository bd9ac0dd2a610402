// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime behaviour of generated families.

use schema_family::{
    Family, IdGeneration, Identified, SchemaFamily, Shape, ShapeKind, TableShape, UuidVersion,
    Validate, ValidationErrors, schema_family
};
use validator::ValidationErrorsKind;

schema_family! {
    /// Things we sell.
    #[family(id = "int")]
    pub struct Widget;
}

schema_family! {
    #[family(id = "uuid")]
    pub struct Gadget;
}

#[derive(
    Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, validator::Validate, SchemaFamily,
)]
#[family(id = "int", table = "articles", schema = "blog")]
pub struct ArticleBase {
    #[validate(length(max = 10))]
    pub title: String,

    #[validate(length(max = 5))]
    pub summary: Option<String>,

    pub views: u64
}

fn invalid_fields(err: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = err.errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    fields
}

fn widget(name: &str) -> Widget {
    Widget::with_id(
        1,
        WidgetCreate {
            name: name.to_string()
        }
    )
}

#[test]
fn name_at_limit_is_valid() {
    assert!(widget(&"a".repeat(255)).validate().is_ok());
    assert!(
        WidgetCreate {
            name: "a".repeat(255)
        }
        .validate()
        .is_ok()
    );
}

#[test]
fn name_over_limit_is_rejected_in_every_member() {
    let name = "a".repeat(256);

    let err = WidgetCreate { name: name.clone() }.validate().unwrap_err();
    assert_eq!(invalid_fields(&err), ["name"]);
    let ValidationErrorsKind::Field(errors) = &err.errors()["name"] else {
        panic!("expected a field error");
    };
    assert_eq!(errors[0].code, "length");
    assert_eq!(errors[0].params["max"], 255);

    assert!(WidgetBase { name: name.clone() }.validate().is_err());
    assert!(WidgetUpdate { name: name.clone() }.validate().is_err());
    assert!(
        WidgetRead {
            name: name.clone(),
            id: 1
        }
        .validate()
        .is_err()
    );
    assert!(widget(&name).validate().is_err());
}

#[test]
fn length_counts_characters() {
    assert!(widget(&"é".repeat(255)).validate().is_ok());
    assert!(widget(&"é".repeat(256)).validate().is_err());
}

#[test]
fn empty_name_is_valid() {
    assert!(widget("").validate().is_ok());
}

#[test]
fn all_violations_are_reported() {
    let create = ArticleCreate {
        title: "a title that is too long".to_string(),
        summary: Some("too long".to_string()),
        views: 0
    };
    let err = create.validate().unwrap_err();
    assert_eq!(invalid_fields(&err), ["summary", "title"]);

    let base = ArticleBase {
        title: create.title.clone(),
        summary: create.summary.clone(),
        views: 0
    };
    assert_eq!(invalid_fields(&base.validate().unwrap_err()), ["summary", "title"]);
}

#[test]
fn absent_optional_value_passes() {
    let create = ArticleCreate {
        title: "short".to_string(),
        summary: None,
        views: 0
    };
    assert!(create.validate().is_ok());
}

#[test]
fn only_table_is_storage_backed() {
    assert!(!WidgetBase::STORAGE_BACKED);
    assert!(!WidgetCreate::STORAGE_BACKED);
    assert!(!WidgetRead::STORAGE_BACKED);
    assert!(!WidgetUpdate::STORAGE_BACKED);
    assert!(Widget::STORAGE_BACKED);
    assert_eq!(Widget::KIND, ShapeKind::Table);
}

#[test]
fn id_only_on_read_and_table() {
    assert_eq!(WidgetBase::field_names(), ["name"]);
    assert_eq!(WidgetCreate::field_names(), ["name"]);
    assert_eq!(WidgetUpdate::field_names(), ["name"]);
    assert_eq!(WidgetRead::field_names(), ["name", "id"]);
    assert_eq!(Widget::field_names(), ["name", "id"]);
    assert_eq!(
        WidgetCreate::field("name").and_then(|f| f.max_length),
        Some(255)
    );
}

#[test]
fn table_metadata() {
    assert_eq!(Widget::TABLE_NAME, "widget");
    assert_eq!(Widget::SCHEMA, None);
    assert_eq!(Widget::ID.field, "id");
    assert_eq!(Widget::ID.ty, "i64");
    assert!(Widget::ID.primary_key);
    assert_eq!(Widget::ID.generation, IdGeneration::Storage);

    assert_eq!(
        Gadget::ID.generation,
        IdGeneration::Uuid(UuidVersion::V4)
    );
    assert_eq!(Article::full_table_name(), "blog.articles");
}

#[test]
fn table_to_read_keeps_id() {
    let widget = Widget::with_id(
        42,
        WidgetCreate {
            name: "Gear".to_string()
        }
    );
    let read = WidgetRead::from(&widget);
    assert_eq!(read.id, 42);
    assert_eq!(read.name, "Gear");
    assert_eq!(read.id(), widget.id());
    assert_eq!(WidgetRead::from(widget), read);
}

#[test]
fn update_keeps_id() {
    let mut article = Article::with_id(
        9,
        ArticleCreate {
            title: "First".to_string(),
            summary: None,
            views: 0
        }
    );
    article.apply(ArticleUpdate {
        title: "Second".to_string(),
        summary: Some("sum".to_string()),
        views: 3
    });
    assert_eq!(article.id, 9);
    assert_eq!(article.title, "Second");
    assert_eq!(article.views, 3);
}

#[test]
fn inputs_reduce_to_base() {
    let base = WidgetBase::from(WidgetCreate {
        name: "Gear".to_string()
    });
    assert_eq!(base.name, "Gear");

    let base = WidgetBase::from(WidgetUpdate {
        name: "Cog".to_string()
    });
    assert_eq!(WidgetCreate::from(base).name, "Cog");

    let base = WidgetBase::from(widget("Sprocket"));
    assert_eq!(base.name, "Sprocket");
}

#[test]
fn uuid_ids_are_generated_per_record() {
    let first = Gadget::from(GadgetCreate {
        name: "Lamp".to_string()
    });
    let second = Gadget::from(GadgetCreate {
        name: "Lamp".to_string()
    });
    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
}

#[test]
fn serde_uses_field_names() {
    let read = WidgetRead::from(widget("Gear"));
    let json = serde_json::to_value(&read).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Gear", "id": 1 }));

    let create: WidgetCreate = serde_json::from_str(r#"{"name":"Cog"}"#).unwrap();
    assert_eq!(create.name, "Cog");
}

fn member_names<F: Family>() -> [&'static str; 5] {
    [
        <F::Base as Shape>::NAME,
        <F::Create as Shape>::NAME,
        <F::Read as Shape>::NAME,
        <F::Update as Shape>::NAME,
        F::NAME
    ]
}

#[test]
fn family_links_members() {
    assert_eq!(Widget::PREFIX, "Widget");
    assert_eq!(
        member_names::<Widget>(),
        ["WidgetBase", "WidgetCreate", "WidgetRead", "WidgetUpdate", "Widget"]
    );
    assert_eq!(
        member_names::<Article>(),
        ["ArticleBase", "ArticleCreate", "ArticleRead", "ArticleUpdate", "Article"]
    );
}
