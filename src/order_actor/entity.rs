use crate::actor_framework::Entity;
use crate::domain::{NewOrder, Order, OrderId, OrderState, OrderUpdate};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = NewOrder;
    type UpdateParams = OrderUpdate;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with state [`OrderState::New`].
    fn from_create_params(id: OrderId, params: NewOrder) -> Result<Self, String> {
        Ok(Self {
            id,
            client_id: params.client_id,
            state: OrderState::New,
        })
    }

    /// Only the state can change; the owning client is fixed.
    fn on_update(&mut self, update: OrderUpdate) -> Result<(), String> {
        if let Some(state) = update.state {
            self.state = state;
        }
        Ok(())
    }
}
