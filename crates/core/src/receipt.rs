//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    loyalty::{points_earned, projected_balance},
    menu::{DrinkKey, Menu},
    pricing::{PricingError, cart_total, line_total},
};

/// Errors that can occur when building or printing an order summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error totalling the cart.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Error finding a drink on the menu.
    #[error("Missing drink")]
    MissingDrink(DrinkKey),

    /// IO error
    #[error("IO error")]
    Io,
}

/// One printable line of an order summary.
#[derive(Debug, Clone)]
pub struct SummaryLine {
    /// Drink name
    pub name: String,

    /// Size, milk and ice options joined for display
    pub options: String,

    /// Extras joined for display, when the line has any
    pub extras: Option<String>,

    /// Number of servings
    pub quantity: u32,

    /// Total for the line
    pub line_total: Money<'static, Currency>,
}

/// Printable summary of an order: its lines, total and loyalty points.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// Lines in cart order.
    lines: Vec<SummaryLine>,

    /// Total across all lines.
    total: Money<'static, Currency>,

    /// Points this order earns.
    points_earned: u64,

    /// Balance the customer would hold after this order.
    points_balance: u64,
}

impl OrderSummary {
    /// Build a summary for a cart against a menu.
    ///
    /// `balance` is the customer's loyalty balance before this order.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a cart line refers to a drink that is
    /// not on the menu, or if the cart cannot be totalled.
    pub fn build(menu: &Menu, cart: &Cart, balance: u64) -> Result<Self, ReceiptError> {
        let mut lines = Vec::with_capacity(cart.len());

        for item in cart.iter() {
            let drink = menu
                .drink(item.drink)
                .ok_or(ReceiptError::MissingDrink(item.drink))?;

            lines.push(SummaryLine {
                name: drink.name.clone(),
                options: item.customization.options_summary(),
                extras: item.customization.extras_summary(),
                quantity: item.quantity,
                line_total: line_total(drink, &item.customization, item.quantity),
            });
        }

        let total = cart_total(menu, cart)?;
        let points_earned = points_earned(total.to_minor_units());

        Ok(OrderSummary {
            lines,
            total,
            points_earned,
            points_balance: projected_balance(balance, points_earned),
        })
    }

    /// The summary lines in cart order.
    #[must_use]
    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    /// Total across all lines.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Points this order earns.
    #[must_use]
    pub fn points_earned(&self) -> u64 {
        self.points_earned
    }

    /// Balance the customer would hold after this order.
    #[must_use]
    pub fn points_balance(&self) -> u64 {
        self.points_balance
    }

    /// Prints the order summary to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();
        let mut line_boundary_rows: SmallVec<[usize; 16]> = smallvec![];

        push_summary_header(&mut builder);
        append_line_rows(self, &mut builder, &mut line_boundary_rows);

        write_summary_table(&mut out, builder, &line_boundary_rows)?;
        write_order_totals(&mut out, self)?;

        Ok(())
    }
}

fn push_summary_header(builder: &mut Builder) {
    builder.push_record(["Qty", "Item", "Options", "Amount"]);
}

fn append_line_rows(
    summary: &OrderSummary,
    builder: &mut Builder,
    line_boundary_rows: &mut SmallVec<[usize; 16]>,
) {
    let mut current_row = 1; // header is row 0

    for line in &summary.lines {
        line_boundary_rows.push(current_row);

        builder.push_record([
            line.quantity.to_string(),
            line.name.clone(),
            line.options.clone(),
            format!("{}", line.line_total),
        ]);

        current_row += 1;

        if let Some(extras) = &line.extras {
            builder.push_record([
                String::new(),
                String::new(),
                format!("+ {extras}"),
                String::new(),
            ]);

            current_row += 1;
        }
    }
}

fn write_summary_table(
    out: &mut impl io::Write,
    builder: Builder,
    line_boundary_rows: &[usize],
) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in line_boundary_rows {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::Io)
}

fn write_order_totals(
    out: &mut impl io::Write,
    summary: &OrderSummary,
) -> Result<(), ReceiptError> {
    let rows = [
        ("Total:", format!("{}", summary.total), true),
        ("Points earned:", format!("+{}", summary.points_earned), false),
        ("Points balance:", summary.points_balance.to_string(), false),
    ];

    let label_width = rows.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value, _)| value.len()).max().unwrap_or(0);

    for (label, value, emphasis) in rows {
        let line = format!(" {label:>label_width$}  {value:>value_width$}");

        if emphasis {
            writeln!(out, "\x1b[1m{line}\x1b[0m").map_err(|_err| ReceiptError::Io)?;
        } else {
            writeln!(out, "{line}").map_err(|_err| ReceiptError::Io)?;
        }
    }

    writeln!(out).map_err(|_err| ReceiptError::Io)
}
