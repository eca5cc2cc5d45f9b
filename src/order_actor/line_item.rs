use crate::actor_framework::Entity;
use crate::domain::{LineItem, LineItemId, NewLineItem};

impl Entity for LineItem {
    type Id = LineItemId;
    type CreateParams = NewLineItem;
    type UpdateParams = ();

    fn id(&self) -> &LineItemId { &self.id }

    fn from_create_params(id: LineItemId, params: NewLineItem) -> Result<Self, String> {
        Ok(Self {
            id,
            order_id: params.order_id,
            product_id: params.product_id,
            quantity: params.quantity,
        })
    }

    /// Line items are immutable once written.
    fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }
}
