//! Canned service payloads.

use serde_json::{Value, json};

pub fn diner() -> Value {
    json!({
        "id": 3,
        "name": "Kai Chen",
        "email": "d@jwt.com",
        "roles": [{ "role": "diner" }]
    })
}

pub fn admin() -> Value {
    json!({
        "id": 1,
        "name": "常用名字",
        "email": "a@jwt.com",
        "roles": [{ "role": "admin" }]
    })
}

pub fn franchisee() -> Value {
    json!({
        "id": "4",
        "name": "pizza franchisee",
        "email": "f@jwt.com",
        "roles": [{ "role": "diner" }, { "objectId": 2, "role": "franchisee" }]
    })
}

/// Login / register / update response.
pub fn auth_response(user: Value, token: &str) -> Value {
    json!({ "user": user, "token": token })
}

pub fn menu() -> Value {
    json!([
        {
            "id": 1,
            "title": "Veggie",
            "image": "pizza1.png",
            "price": 0.0038,
            "description": "A garden of delight"
        },
        {
            "id": 2,
            "title": "Pepperoni",
            "image": "pizza2.png",
            "price": 0.0042,
            "description": "Spicy treat"
        }
    ])
}

pub fn franchises() -> Value {
    json!({
        "franchises": [
            {
                "id": 2,
                "name": "LotaPizza",
                "stores": [
                    { "id": 4, "name": "Lehi" },
                    { "id": 5, "name": "Springville" },
                    { "id": 6, "name": "American Fork" }
                ]
            },
            { "id": 3, "name": "PizzaCorp", "stores": [{ "id": 7, "name": "Spanish Fork" }] },
            { "id": 4, "name": "topSpot", "stores": [] }
        ],
        "more": false
    })
}
