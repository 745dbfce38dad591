//! Prompts and printing.
//!
//! Generic over the input and output streams so sessions can be scripted in
//! tests. Every prompt returns `ErrorKind::UnexpectedEof` once input runs out.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use stockroom_core::WarehouseId;
use stockroom_query::WarehouseCounts;

use crate::menu::MenuOption;

/// Python-style `capitalize`: first character upper-cased, the rest lower-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `text` (no newline) and read one line, without its line ending.
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print_invalid(&mut self, choice: &str) -> io::Result<()> {
        writeln!(self.output, "\n\n\t***** No option {choice}! *****\n")
    }

    /// Ask a y/n question until the answer is one of the two.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            match self.prompt(question)?.trim() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                other => {
                    let other = other.to_string();
                    self.print_invalid(&other)?;
                }
            }
        }
    }

    pub fn ask_user_name(&mut self) -> io::Result<String> {
        self.prompt("\nEnter your name: ")
    }

    pub fn greet(&mut self, name: &str, is_employee: bool) -> io::Result<()> {
        if is_employee {
            writeln!(
                self.output,
                "\nHello, {name} \nIf you experience a problem with the system, please contact technical support."
            )
        } else {
            writeln!(
                self.output,
                "\nHello, {name}! \nWelcome to our Warehouse Database. \nIf you don't find what you are looking for, please ask one of our staff members to assist you."
            )
        }
    }

    pub fn display_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nOptions:")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option.number(), option.label())?;
        }
        Ok(())
    }

    /// Show the menu and read a choice, repeating until it is valid.
    pub fn ask_for_option(&mut self) -> io::Result<MenuOption> {
        loop {
            self.display_options()?;
            let choice = self.prompt("\nType the number of the operation: ")?;
            match choice.parse::<MenuOption>() {
                Ok(option) => return Ok(option),
                Err(_) => self.print_invalid(choice.trim())?,
            }
        }
    }

    /// Per-item listing; warehouses without the item are left out.
    pub fn display_items(&mut self, items: &BTreeMap<String, WarehouseCounts>) -> io::Result<()> {
        for (name, per_warehouse) in items {
            writeln!(self.output, "\n{name}\n")?;
            for (id, amount) in per_warehouse.iter().filter(|(_, amount)| **amount > 0) {
                writeln!(self.output, "Total amount of item in Warehouse {id}: {amount}")?;
            }
        }
        Ok(())
    }

    pub fn ask_for_item_name(&mut self) -> io::Result<String> {
        self.prompt("\nEnter name of the item: ")
    }

    /// `locations` pairs each matching unit's warehouse with its days in storage.
    pub fn display_search_result(
        &mut self,
        name: &str,
        total: usize,
        locations: &[(WarehouseId, i64)],
    ) -> io::Result<()> {
        if total == 0 {
            return writeln!(self.output, "\nNot in stock");
        }

        writeln!(self.output, "\n{total} {} in stock", capitalize(name))?;
        for (warehouse, days) in locations {
            writeln!(self.output, "   In Warehouse {warehouse} for {days} days")?;
        }
        Ok(())
    }

    pub fn ask_if_user_wants_to_order(&mut self) -> io::Result<bool> {
        self.ask_yes_no("\nDo you want to order? (y/n): ")
    }

    pub fn ask_for_password(&mut self) -> io::Result<String> {
        self.prompt("\nPassword or press enter to quit: ")
    }

    /// Read a quantity, repeating until the input is a non-negative number.
    pub fn ask_how_much_to_order(&mut self) -> io::Result<usize> {
        loop {
            let raw = self.prompt("\nHow many would you like to order? ")?;
            match raw.trim().parse::<usize>() {
                Ok(amount) => return Ok(amount),
                Err(_) => writeln!(self.output, "\n{} is not a valid amount", raw.trim())?,
            }
        }
    }

    pub fn print_not_enough_items_in_stock(&mut self, available: usize, name: &str) -> io::Result<()> {
        writeln!(self.output, "\nThere are only {available} {name}")
    }

    pub fn ask_if_user_wants_to_order_max_amount(&mut self, available: usize) -> io::Result<bool> {
        self.ask_yes_no(&format!("\nDo you want to order maximum amount ({available})? (y/n): "))
    }

    pub fn print_order(&mut self, amount: usize, name: &str) -> io::Result<()> {
        writeln!(self.output, "\nYou have ordered {amount} {name}")
    }

    pub fn print_order_cancelled(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nOrder cancelled")
    }

    pub fn display_categories(&mut self, numbered: &[(usize, String, usize)]) -> io::Result<()> {
        writeln!(self.output)?;
        for (number, category, amount) in numbered {
            writeln!(self.output, "{number}. {category} ({amount})")?;
        }
        Ok(())
    }

    pub fn ask_for_number_of_category_to_browse(&mut self) -> io::Result<String> {
        self.prompt("\nType the number of category you want to browse: ")
    }

    pub fn print_no_such_category(&mut self, choice: &str) -> io::Result<()> {
        self.print_invalid(choice)
    }

    pub fn display_all_items_of_category(
        &mut self,
        category: &str,
        items: &[(String, WarehouseId)],
    ) -> io::Result<()> {
        writeln!(self.output, "\n{category}:")?;
        for (name, warehouse) in items {
            writeln!(self.output, "{name}, Warehouse {warehouse}")?;
        }
        Ok(())
    }

    /// Staff also get a recap of what they did this session, which is a blank
    /// line when they did nothing.
    pub fn farewell(&mut self, name: &str, is_employee: bool, actions: &[String]) -> io::Result<()> {
        writeln!(self.output, "\nThank you for your visit, {name}!\n")?;
        if is_employee {
            let recap: Vec<String> = actions
                .iter()
                .enumerate()
                .map(|(number, action)| format!("{}. {action}", number + 1))
                .collect();
            writeln!(self.output, "{}", recap.join("\n"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn capitalize_matches_python_semantics() {
        assert_eq!(capitalize("red LAPTOP"), "Red laptop");
        assert_eq!(capitalize("blue remote control"), "Blue remote control");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn prompt_strips_line_endings_and_reports_eof() {
        let mut c = console("USER_TYPED_THIS\r\n");
        assert_eq!(c.ask_user_name().unwrap(), "USER_TYPED_THIS");

        let err = c.ask_user_name().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn greeting_differs_for_staff_and_visitors() {
        let mut c = console("");
        c.greet("Tomek", true).unwrap();
        assert_eq!(
            printed(&c),
            "\nHello, Tomek \nIf you experience a problem with the system, please contact technical support.\n"
        );

        let mut c = console("");
        c.greet("Anonymous", false).unwrap();
        assert!(printed(&c).starts_with("\nHello, Anonymous! \nWelcome to our Warehouse Database. \nIf you"));
    }

    #[test]
    fn invalid_option_is_reported_and_asked_again() {
        let mut c = console("INVALID\n3\n");
        assert_eq!(c.ask_for_option().unwrap(), MenuOption::BrowseByCategory);

        let out = printed(&c);
        assert!(out.contains("No option INVALID"));
        assert!(!out.contains("No option 3"));
        assert_eq!(out.matches("Options:").count(), 2);
    }

    #[test]
    fn display_options_lists_all_four() {
        let mut c = console("");
        c.display_options().unwrap();
        assert_eq!(
            printed(&c),
            "\nOptions:\n1. List all items\n2. Search an item and place an order\n3. Browse by category\n4. Quit\n"
        );
    }

    #[test]
    fn display_items_skips_empty_warehouses() {
        let mut c = console("");
        let items = BTreeMap::from([(
            "Blue Remote control".to_string(),
            BTreeMap::from([
                (WarehouseId::new(1), 1),
                (WarehouseId::new(2), 0),
                (WarehouseId::new(3), 2),
            ]),
        )]);
        c.display_items(&items).unwrap();

        assert_eq!(
            printed(&c),
            "\nBlue Remote control\n\nTotal amount of item in Warehouse 1: 1\nTotal amount of item in Warehouse 3: 2\n"
        );
    }

    #[test]
    fn search_result_lists_locations_or_not_in_stock() {
        let mut c = console("");
        c.display_search_result(
            "blue remote control",
            2,
            &[(WarehouseId::new(1), 419), (WarehouseId::new(3), 351)],
        )
        .unwrap();
        assert_eq!(
            printed(&c),
            "\n2 Blue remote control in stock\n   In Warehouse 1 for 419 days\n   In Warehouse 3 for 351 days\n"
        );

        let mut c = console("");
        c.display_search_result("Red Laptop", 0, &[]).unwrap();
        assert_eq!(printed(&c), "\nNot in stock\n");
    }

    #[test]
    fn yes_no_questions_repeat_on_invalid_answers() {
        let mut c = console("y\n");
        assert!(c.ask_if_user_wants_to_order().unwrap());

        let mut c = console("n\n");
        assert!(!c.ask_if_user_wants_to_order().unwrap());

        let mut c = console("INVALID\ny\n");
        assert!(c.ask_if_user_wants_to_order_max_amount(10).unwrap());
        assert!(printed(&c).contains("No option INVALID"));
        assert!(printed(&c).contains("maximum amount (10)"));
    }

    #[test]
    fn quantity_prompt_repeats_on_non_numbers() {
        let mut c = console("lots\n-2\n3\n");
        assert_eq!(c.ask_how_much_to_order().unwrap(), 3);

        let out = printed(&c);
        assert!(out.contains("lots is not a valid amount"));
        assert!(out.contains("-2 is not a valid amount"));
    }

    #[test]
    fn order_messages() {
        let mut c = console("");
        c.print_not_enough_items_in_stock(8, "Red Laptop").unwrap();
        c.print_order(8, "Red Laptop").unwrap();
        c.print_order_cancelled().unwrap();
        assert_eq!(
            printed(&c),
            "\nThere are only 8 Red Laptop\n\nYou have ordered 8 Red Laptop\n\nOrder cancelled\n"
        );
    }

    #[test]
    fn category_listings() {
        let mut c = console("5\n");
        c.display_categories(&[(1, "Remote control".to_string(), 7), (2, "Smartwatch".to_string(), 1)])
            .unwrap();
        assert_eq!(c.ask_for_number_of_category_to_browse().unwrap(), "5");
        c.display_all_items_of_category("Smartwatch", &[("Black Smartwatch".to_string(), WarehouseId::new(4))])
            .unwrap();

        let out = printed(&c);
        assert!(out.starts_with("\n1. Remote control (7)\n2. Smartwatch (1)\n"));
        assert!(out.ends_with("\nSmartwatch:\nBlack Smartwatch, Warehouse 4\n"));
    }

    #[test]
    fn farewell_shows_actions_to_staff_only() {
        let actions = vec!["You have listed all items".to_string()];

        let mut c = console("");
        c.farewell("Tomek", true, &actions).unwrap();
        assert_eq!(
            printed(&c),
            "\nThank you for your visit, Tomek!\n\n1. You have listed all items\n"
        );

        let mut c = console("");
        c.farewell("Anonymous", false, &actions).unwrap();
        assert_eq!(printed(&c), "\nThank you for your visit, Anonymous!\n\n");
    }

    #[test]
    fn staff_farewell_without_actions_ends_with_blank_line() {
        let mut c = console("");
        c.farewell("Tomek", true, &[]).unwrap();
        assert_eq!(printed(&c), "\nThank you for your visit, Tomek!\n\n\n");
    }
}
