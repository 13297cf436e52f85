use anyhow::{Context as _, ensure};
use quest::{AnswerKind, Choice, Question, Value};

/// Most toppings a single pizza can carry.
pub const MAX_TOPPINGS: u8 = 5;

/// A pizza order as one question tree: the size first, then its follow-ups.
///
/// The follow-ups have no text of their own and are labelled with the
/// order's prefix instead.
pub fn pizza_order() -> Question {
    let mut order = Question::choose([
        Choice::new("Small (10\")", 10u8),
        Choice::new("Medium (12\")", 12u8),
        Choice::new("Large (14\")", 14u8),
    ])
    .with_text("Pizza size:")
    .with_error_message("No such size.")
    .with_child(
        Question::new(AnswerKind::U8)
            .with_message("How many toppings?")
            .with_default(0u8)
            .on_answer(|ctx| {
                let count = ctx.value().and_then(Value::as_u64).unwrap_or_default();
                ensure!(
                    count <= u64::from(MAX_TOPPINGS),
                    "At most {MAX_TOPPINGS} toppings, please."
                );
                Ok(())
            }),
    )
    .with_child(
        Question::new(AnswerKind::Bool)
            .with_message("Deliver it?")
            .with_options("(y/n)")
            .resolve_when(|ctx| ctx.value().and_then(Value::as_bool) == Some(true))
            .with_child(Question::new(AnswerKind::Text).with_message("Address:")),
    );
    order.set_inherited(Some("[pizza]".to_string()));
    order
}

/// An order read back from a resolved [`pizza_order`] tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaOrder {
    pub inches: u8,
    pub toppings: u8,
    pub delivery: Option<String>,
}

impl PizzaOrder {
    pub fn from_question(order: &Question) -> anyhow::Result<Self> {
        let inches = match order.value() {
            Some(Value::U8(inches)) => *inches,
            _ => anyhow::bail!("size was not answered"),
        };
        let toppings = match order.child(0).and_then(Question::value) {
            Some(Value::U8(toppings)) => *toppings,
            _ => anyhow::bail!("toppings were not answered"),
        };

        let deliver = order.child(1).context("order has no delivery question")?;
        let delivery = match deliver.value().and_then(Value::as_bool) {
            Some(true) => deliver
                .child(0)
                .and_then(Question::value)
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        };

        Ok(Self {
            inches,
            toppings,
            delivery,
        })
    }
}
