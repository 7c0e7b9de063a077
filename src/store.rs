use crate::utils::{format_currency, round2};
use rand::Rng;
use std::time::{Duration, Instant};

/// Delay before a completed transaction clears itself.
pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(4);

/// Largest distance a randomized price may move from the base price.
pub const PRICE_VARIATION: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreItem {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_price: f64,
}

pub const STORE_ITEMS: [StoreItem; 4] = [
    StoreItem {
        id: 1,
        name: "Juice Box",
        icon: "🧃",
        base_price: 1.25,
    },
    StoreItem {
        id: 2,
        name: "Apple",
        icon: "🍎",
        base_price: 0.75,
    },
    StoreItem {
        id: 3,
        name: "Toy Car",
        icon: "🚗",
        base_price: 3.5,
    },
    StoreItem {
        id: 4,
        name: "Pencil Case",
        icon: "✏️",
        base_price: 2.1,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denomination {
    pub value: f64,
    pub name: &'static str,
    pub label: &'static str,
}

pub const DENOMINATIONS: [Denomination; 6] = [
    Denomination {
        value: 0.01,
        name: "Penny",
        label: "1¢",
    },
    Denomination {
        value: 0.05,
        name: "Nickel",
        label: "5¢",
    },
    Denomination {
        value: 0.1,
        name: "Dime",
        label: "10¢",
    },
    Denomination {
        value: 0.25,
        name: "Quarter",
        label: "25¢",
    },
    Denomination {
        value: 1.0,
        name: "$1 Bill",
        label: "$1",
    },
    Denomination {
        value: 5.0,
        name: "$5 Bill",
        label: "$5",
    },
];

/// A catalog item with its current randomized price.
#[derive(Debug, Clone)]
pub struct PricedItem {
    pub item: StoreItem,
    pub price: f64,
}

/// One cart line. `cart_key` disambiguates identical items added
/// more than once.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub cart_key: u64,
    pub item: StoreItem,
    pub price: f64,
}

/// The checkout state machine: priced catalog, cart, tendered payment,
/// user-facing message, and an optional scheduled auto-reset deadline.
#[derive(Debug)]
pub struct StoreState {
    pub items: Vec<PricedItem>,
    pub cart: Vec<CartEntry>,
    pub payment: f64,
    pub message: String,
    pub pending_reset: Option<Instant>,
    next_cart_key: u64,
}

fn randomize_price(base_price: f64) -> f64 {
    let variation = rand::thread_rng().gen_range(-PRICE_VARIATION..=PRICE_VARIATION);
    // No floor: a low base price can produce a negative price.
    round2(base_price + variation)
}

fn generate_priced_items() -> Vec<PricedItem> {
    STORE_ITEMS
        .iter()
        .map(|item| PricedItem {
            item: *item,
            price: randomize_price(item.base_price),
        })
        .collect()
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            items: generate_priced_items(),
            cart: Vec::new(),
            payment: 0.0,
            message: "Pick items and pay!".to_string(),
            pending_reset: None,
            next_cart_key: 0,
        }
    }

    pub fn subtotal(&self) -> f64 {
        round2(self.cart.iter().map(|entry| entry.price).sum())
    }

    pub fn change(&self) -> f64 {
        round2(self.payment - self.subtotal())
    }

    pub fn re_randomize_prices(&mut self) {
        self.items = generate_priced_items();
        self.message = "Item prices have been re-randomized!".to_string();
    }

    /// Add the catalog item at `item_index` to the cart. The message
    /// total is computed from the subtotal taken before the entry is
    /// appended plus the item's price.
    pub fn add_item(&mut self, item_index: usize) {
        let Some(priced) = self.items.get(item_index).cloned() else {
            return;
        };
        let message_total = round2(self.subtotal() + priced.price);
        let cart_key = self.next_cart_key;
        self.next_cart_key += 1;
        self.cart.push(CartEntry {
            cart_key,
            item: priced.item,
            price: priced.price,
        });
        self.message = format!(
            "Added {}. Total: {}",
            priced.item.name,
            format_currency(message_total)
        );
    }

    /// Remove the cart entry with `cart_key`; no-op if absent.
    pub fn remove_item(&mut self, cart_key: u64) {
        let Some(position) = self
            .cart
            .iter()
            .position(|entry| entry.cart_key == cart_key)
        else {
            return;
        };
        let entry = self.cart.remove(position);
        self.message = format!("Removed {}. Subtotal updated.", entry.item.name);
    }

    pub fn add_currency(&mut self, denomination: Denomination) {
        self.payment = round2(self.payment + denomination.value);
        self.message = if self.payment >= self.subtotal() {
            format!(
                "You paid {}. Press Checkout.",
                format_currency(self.payment)
            )
        } else {
            format!("Paying... {}", format_currency(self.payment))
        };
    }

    /// Attempt checkout. Fails with a message (state otherwise
    /// unchanged) when the cart is empty or payment falls short. On
    /// success, shows the change, regenerates prices, and schedules an
    /// automatic reset.
    pub fn checkout(&mut self) {
        if self.subtotal() == 0.0 {
            self.message = "Cart empty! Nothing to check out.".to_string();
            return;
        }
        let change = self.change();
        if change >= 0.0 {
            // Regenerate prices without clobbering the completion message.
            self.items = generate_priced_items();
            self.message = format!("Transaction Complete! Change: {}", format_currency(change));
            self.pending_reset = Some(Instant::now() + AUTO_RESET_DELAY);
        } else {
            self.message = format!(
                "You still owe {}. Please add more payment.",
                format_currency(-change)
            );
        }
    }

    /// Clear the cart and payment. The pending auto-reset deadline is
    /// left in place; when it fires after a manual reset the second
    /// reset is a harmless no-op.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.payment = 0.0;
        self.message = "Reset! Start a new transaction.".to_string();
    }

    /// Fire the scheduled post-checkout reset once its deadline has
    /// passed. Called from the event-loop tick.
    pub fn apply_pending_reset(&mut self, now: Instant) -> bool {
        match self.pending_reset {
            Some(deadline) if now >= deadline => {
                self.pending_reset = None;
                self.reset();
                true
            }
            _ => false,
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}
