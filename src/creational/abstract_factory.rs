//! Couriers that build matching shipping endpoints.
//!
//! A [`PostalShipment`] asks its [`Courier`] for an origin and a destination
//! without naming the concrete types; the courier decides which family they
//! come from.

/// Where a shipment starts.
pub trait ShippingOrigin {
    fn label(&self) -> &'static str;
}

/// Where a shipment ends.
pub trait ShippingDestination {
    fn label(&self) -> &'static str;
}

/// Factory for one family of origin/destination pairs.
pub trait Courier {
    fn origin(&self) -> Box<dyn ShippingOrigin>;
    fn destination(&self) -> Box<dyn ShippingDestination>;
}

pub struct DomesticShippingOrigin;
pub struct DomesticShippingDestination;
pub struct InternationalShippingOrigin;
pub struct InternationalShippingDestination;

impl ShippingOrigin for DomesticShippingOrigin {
    fn label(&self) -> &'static str {
        "DomesticShippingOrigin"
    }
}

impl ShippingDestination for DomesticShippingDestination {
    fn label(&self) -> &'static str {
        "DomesticShippingDestination"
    }
}

impl ShippingOrigin for InternationalShippingOrigin {
    fn label(&self) -> &'static str {
        "InternationalShippingOrigin"
    }
}

impl ShippingDestination for InternationalShippingDestination {
    fn label(&self) -> &'static str {
        "InternationalShippingDestination"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DomesticCourier;

impl Courier for DomesticCourier {
    fn origin(&self) -> Box<dyn ShippingOrigin> {
        Box::new(DomesticShippingOrigin)
    }

    fn destination(&self) -> Box<dyn ShippingDestination> {
        Box::new(DomesticShippingDestination)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InternationalCourier;

impl Courier for InternationalCourier {
    fn origin(&self) -> Box<dyn ShippingOrigin> {
        Box::new(InternationalShippingOrigin)
    }

    fn destination(&self) -> Box<dyn ShippingDestination> {
        Box::new(InternationalShippingDestination)
    }
}

/// A shipment whose endpoints come from a courier.
pub struct PostalShipment {
    origin: Box<dyn ShippingOrigin>,
    destination: Box<dyn ShippingDestination>,
}

impl PostalShipment {
    pub fn new(courier: &dyn Courier) -> Self {
        Self {
            origin: courier.origin(),
            destination: courier.destination(),
        }
    }

    /// Delivery line, e.g. `Deliver from: DomesticShippingOrigin to DomesticShippingDestination`.
    pub fn deliver(&self) -> String {
        format!(
            "Deliver from: {} to {}",
            self.origin.label(),
            self.destination.label()
        )
    }
}
