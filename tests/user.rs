
use async_graphql::PathSegment;
use serde_json::json;
use social_graph_server::{member_type::model::MemberTypeId, user::model::User};
use test_utils::{error_codes, random_id, TestDatabase};

#[tokio::test]
async fn test_create_user() {
    let test_db = TestDatabase::new().await;

    let create_user_mutation = r#"mutation {
            createUser(dto: { name: "Test User", balance: 12.5 }) {
                name,
                balance
            }
        }
        "#;
    let data = test_db.data(create_user_mutation).await;
    assert_eq!(
        data,
        json!({ "createUser": { "name": "Test User", "balance": 12.5 } })
    );
}

#[tokio::test]
async fn test_created_user_can_be_read_back() {
    let test_db = TestDatabase::new().await;
    let created = test_db.create_user("Grace", 99.0).await;

    let query = format!(r#"query {{ user(id: "{}") {{ id, name, balance }} }}"#, created.id);
    let data = test_db.data(query).await;
    let user: User = serde_json::from_value(data["user"].clone()).expect("Should deserialize user");
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Grace");
    assert_eq!(user.balance, 99.0);
}

#[tokio::test]
async fn test_create_user_requires_balance() {
    let test_db = TestDatabase::new().await;

    let response = test_db
        .execute(r#"mutation { createUser(dto: { name: "No balance" }) { id } }"#)
        .await;
    assert!(response.is_err());
    assert!(response.data.into_json().unwrap().is_null());

    let data = test_db.data("query { users { id } }").await;
    assert_eq!(data, json!({ "users": [] }));
}

#[tokio::test]
async fn test_change_user_keeps_omitted_fields() {
    let test_db = TestDatabase::new().await;
    let user = test_db.create_user("Before", 5.0).await;

    let mutation = format!(
        r#"mutation {{
            changeUser(id: "{}", dto: {{ name: "After" }}) {{ name, balance }}
        }}"#,
        user.id
    );
    let data = test_db.data(mutation).await;
    assert_eq!(
        data,
        json!({ "changeUser": { "name": "After", "balance": 5.0 } })
    );

    let mutation = format!(
        r#"mutation {{
            changeUser(id: "{}", dto: {{ balance: 7.25 }}) {{ name, balance }}
        }}"#,
        user.id
    );
    let data = test_db.data(mutation).await;
    assert_eq!(
        data,
        json!({ "changeUser": { "name": "After", "balance": 7.25 } })
    );
}

#[tokio::test]
async fn test_change_unknown_user_fails() {
    let test_db = TestDatabase::new().await;

    let mutation = format!(
        r#"mutation {{ changeUser(id: "{}", dto: {{ name: "Ghost" }}) {{ id }} }}"#,
        random_id()
    );
    let response = test_db.execute(mutation).await;
    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "changeUser": null })
    );
}

#[tokio::test]
async fn test_failed_mutation_does_not_stop_siblings() {
    let test_db = TestDatabase::new().await;

    let mutation = format!(
        r#"mutation {{
            changeUser(id: "{}", dto: {{ name: "Ghost" }}) {{ id }},
            createUser(dto: {{ name: "Real", balance: 1.0 }}) {{ name }}
        }}"#,
        random_id()
    );
    let response = test_db.execute(mutation).await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].path,
        vec![PathSegment::Field("changeUser".to_string())]
    );
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "changeUser": null, "createUser": { "name": "Real" } })
    );
}

#[tokio::test]
async fn test_delete_user() {
    let test_db = TestDatabase::new().await;
    let user = test_db.create_user("Short lived", 0.0).await;

    let mutation = format!(r#"mutation {{ deleteUser(id: "{}") }}"#, user.id);
    let data = test_db.data(mutation.clone()).await;
    assert_eq!(data, json!({ "deleteUser": true }));

    // Second attempt finds nothing and reports false instead of an error.
    let data = test_db.data(mutation).await;
    assert_eq!(data, json!({ "deleteUser": false }));

    let query = format!(r#"query {{ user(id: "{}") {{ id }} }}"#, user.id);
    let data = test_db.data(query).await;
    assert_eq!(data, json!({ "user": null }));
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let test_db = TestDatabase::new().await;
    let user = test_db.create_user("Doomed", 0.0).await;
    let friend = test_db.create_user("Friend", 0.0).await;

    let profile = test_db.create_profile(user.id, MemberTypeId::Basic).await;
    let post = test_db.create_post(user.id, "Last words").await;
    assert!(test_db.subscribe(user.id, friend.id).await);
    assert!(test_db.subscribe(friend.id, user.id).await);

    let data = test_db
        .data(format!(r#"mutation {{ deleteUser(id: "{}") }}"#, user.id))
        .await;
    assert_eq!(data, json!({ "deleteUser": true }));

    let query = format!(
        r#"query {{
            profile(id: "{}") {{ id }},
            post(id: "{}") {{ id }},
            user(id: "{}") {{ userSubscribedTo {{ id }}, subscribedToUser {{ id }} }}
        }}"#,
        profile.id, post.id, friend.id
    );
    let data = test_db.data(query).await;
    assert_eq!(
        data,
        json!({
            "profile": null,
            "post": null,
            "user": { "userSubscribedTo": [], "subscribedToUser": [] }
        })
    );
    assert_eq!(test_db.edge_count(friend.id, user.id).await, 0);
}
