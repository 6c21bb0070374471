#![allow(dead_code)]

use gqlcache_types::{ArgumentValue, Field, Request};
use serde_json::{Value, json};

pub const POST_ID: &str = "p1";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn author_fields() -> Vec<Field> {
    vec![Field::leaf("__typename"), Field::leaf("id"), Field::leaf("name")]
}

pub fn post_fields() -> Vec<Field> {
    vec![
        Field::leaf("__typename"),
        Field::leaf("id"),
        Field::leaf("title"),
        Field::leaf("body"),
        Field::object("author", author_fields()),
    ]
}

/// `query($id: ID!) { post(id: $id) { ... } }`
pub fn post_request(id: &str) -> Request {
    Request::new(vec![
        Field::object("post", post_fields()).with_argument("id", ArgumentValue::variable("id")),
    ])
    .with_variable("id", id)
}

/// `{ posts { ... } }`
pub fn posts_request() -> Request {
    Request::new(vec![Field::object("posts", post_fields())])
}

/// `{ authors { __typename id name posts { __typename id title body } } }`
pub fn authors_request() -> Request {
    Request::new(vec![Field::object(
        "authors",
        vec![
            Field::leaf("__typename"),
            Field::leaf("id"),
            Field::leaf("name"),
            Field::object(
                "posts",
                vec![
                    Field::leaf("__typename"),
                    Field::leaf("id"),
                    Field::leaf("title"),
                    Field::leaf("body"),
                ],
            ),
        ],
    )])
}

/// `{ posts { ... } authors { ... } }`
pub fn posts_and_authors_request() -> Request {
    let mut query = posts_request().query;
    query.extend(authors_request().query);
    Request::new(query)
}

pub fn author(id: &str, name: &str) -> Value {
    json!({"__typename": "Author", "id": id, "name": name})
}

pub fn post(id: &str, title: &str, author: Value) -> Value {
    json!({
        "__typename": "Post",
        "id": id,
        "title": title,
        "body": format!("Body of {id}"),
        "author": author,
    })
}

pub fn post_data(id: &str, title: &str) -> Value {
    json!({"post": post(id, title, author("a1", "Murphy"))})
}

pub fn posts_data() -> Value {
    json!({
        "posts": [
            post("p1", "Quam odit", author("a1", "Murphy")),
            post("p2", "Second", author("a2", "Ada")),
            post("p3", "Third", author("a1", "Murphy")),
        ]
    })
}

pub fn authors_data() -> Value {
    let stub = |id: &str, title: &str| {
        json!({"__typename": "Post", "id": id, "title": title, "body": format!("Body of {id}")})
    };
    json!({
        "authors": [
            {
                "__typename": "Author", "id": "a1", "name": "Murphy",
                "posts": [stub("p1", "Quam odit"), stub("p3", "Third")]
            },
            {
                "__typename": "Author", "id": "a2", "name": "Ada",
                "posts": [stub("p2", "Second")]
            }
        ]
    })
}

pub fn merge_roots(a: Value, b: Value) -> Value {
    let mut a = a.as_object().cloned().unwrap_or_default();
    a.extend(b.as_object().cloned().unwrap_or_default());
    Value::Object(a)
}
