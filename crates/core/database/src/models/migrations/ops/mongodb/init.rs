use crate::mongodb::bson::doc;
use crate::MongoDb;

pub const LATEST_REVISION: i32 = 1;

pub async fn create_database(db: &MongoDb) {
    info!("Creating database.");
    let db = db.db();

    db.create_collection("users")
        .await
        .expect("Failed to create users collection.");

    db.create_collection("sessions")
        .await
        .expect("Failed to create sessions collection.");

    db.create_collection("saved_events")
        .await
        .expect("Failed to create saved_events collection.");

    db.create_collection("migrations")
        .await
        .expect("Failed to create migrations collection.");

    db.run_command(doc! {
        "createIndexes": "users",
        "indexes": [
            {
                "key": {
                    "email": 1_i32
                },
                "name": "email",
                "unique": true
            }
        ]
    })
    .await
    .expect("Failed to create users index.");

    db.run_command(doc! {
        "createIndexes": "sessions",
        "indexes": [
            {
                "key": {
                    "token": 1_i32
                },
                "name": "token",
                "unique": true
            },
            {
                "key": {
                    "user_id": 1_i32
                },
                "name": "user_id"
            }
        ]
    })
    .await
    .expect("Failed to create sessions index.");

    // The composite _id already keeps (owner, event) pairs unique;
    // this index only serves the list query.
    db.run_command(doc! {
        "createIndexes": "saved_events",
        "indexes": [
            {
                "key": {
                    "_id.user": 1_i32,
                },
                "name": "user_id"
            }
        ]
    })
    .await
    .expect("Failed to create saved_events index.");

    db.collection("migrations")
        .insert_one(doc! {
            "_id": 0_i32,
            "revision": LATEST_REVISION
        })
        .await
        .expect("Failed to save migration info.");

    info!("Created database.");
}
