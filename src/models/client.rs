use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Document;

/// Client document as stored in the `clients` collection.
///
/// Updates replace the whole document, so an `ipaddress` omitted from a
/// later update is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
}

impl Document for Client {
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
