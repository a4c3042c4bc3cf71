//! Tool declarations returned by `tools/list`.

use super::models::*;
use serde_json::{json, Value};

/// JSON schema of an [`Animal`](crate::rescue::Animal) record.
fn animal_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "species": { "type": "string" },
            "breed": { "type": "string" },
            "age": { "type": "integer", "minimum": 0 },
            "gender": { "type": "string", "enum": ["male", "female"] },
            "size": { "type": "string", "enum": ["small", "medium", "large"] },
            "color": { "type": "string" },
            "description": { "type": "string" },
            "vaccinated": { "type": "boolean" },
            "spayedNeutered": { "type": "boolean" },
            "goodWithKids": { "type": "boolean" },
            "goodWithPets": { "type": "boolean" },
            "energyLevel": { "type": "string", "enum": ["low", "medium", "high"] },
            "adoptionFee": { "type": "integer", "minimum": 0 },
            "dateArrived": { "type": "string", "format": "date" },
            "adopted": { "type": "boolean" }
        },
        "required": [
            "id", "name", "species", "breed", "age", "gender", "size", "color",
            "description", "vaccinated", "spayedNeutered", "goodWithKids",
            "goodWithPets", "energyLevel", "adoptionFee", "dateArrived", "adopted"
        ]
    })
}

fn certificate_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "animalId": { "type": "string" },
            "timestamp": { "type": "string", "format": "date-time" },
            "pickupLocation": { "type": "string" }
        },
        "required": ["animalId", "timestamp", "pickupLocation"]
    })
}

fn nullable(schema: Value) -> Value {
    json!({ "anyOf": [schema, { "type": "null" }] })
}

fn string_input(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: { "type": "string", "description": description }
        },
        "required": [field],
        "additionalProperties": false
    })
}

/// Every tool the server exposes, in the shape `tools/list` returns.
pub fn tool_declarations() -> Value {
    json!([
        {
            "name": LIST_ANIMALS_TOOL,
            "title": "List all animals",
            "description": "List all animals in the animal rescue service that are still available for adoption",
            "inputSchema": {
                "type": "object",
                "properties": {},
                "additionalProperties": false
            },
            "outputSchema": {
                "type": "object",
                "properties": {
                    "animals": { "type": "array", "items": animal_schema() }
                },
                "required": ["animals"]
            }
        },
        {
            "name": GET_ANIMAL_BY_ID_TOOL,
            "title": "Get an animal",
            "description": "Get an animal by id, only use this if you know the id of the animal",
            "inputSchema": string_input("id", "The ID of the animal to retrieve"),
            "outputSchema": {
                "type": "object",
                "properties": { "animal": nullable(animal_schema()) },
                "required": ["animal"]
            }
        },
        {
            "name": SEARCH_BY_NAME_TOOL,
            "title": "Find an animal by name",
            "description": "Find an animal by name (case insensitive), only use this if you know the name of the animal",
            "inputSchema": string_input("name", "The name of the animal to search for"),
            "outputSchema": {
                "type": "object",
                "properties": { "animal": nullable(animal_schema()) },
                "required": ["animal"]
            }
        },
        {
            "name": ADOPT_PET_TOOL,
            "title": "Adopt a pet",
            "description": "Adopt a pet by id (a name also works), if success is false and the certificate is null the adoption failed. If a pet is not compatible with the customer, urge them to reconsider and adopt a more compatible pet.",
            "inputSchema": string_input("id", "The unique ID (e.g. 'dog-001') or name (e.g. 'Max') of the animal to adopt"),
            "outputSchema": {
                "type": "object",
                "properties": {
                    "certificate": nullable(certificate_schema()),
                    "success": { "type": "boolean" }
                },
                "required": ["certificate", "success"]
            }
        }
    ])
}
