use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Document;

/// Swimming tool document as stored in the `swimmingTools` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimmingTool {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub price: f64,
}

impl Document for SwimmingTool {
    const COLLECTION: &'static str = "swimmingTools";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
