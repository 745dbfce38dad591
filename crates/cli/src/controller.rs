//! The interactive session: identify the person, then run menu operations
//! until they quit.

use std::io::{self, BufRead, Write};

use chrono::NaiveDateTime;

use stockroom_core::PersonId;
use stockroom_personnel::Person;
use stockroom_query::{Manager, OrderPlan, plan_order};

use crate::console::Console;
use crate::menu::MenuOption;

/// Who is using the current session.
#[derive(Debug, Clone)]
enum SessionUser {
    /// A member of personnel; authentication state lives in the manager.
    Staff(PersonId),
    /// Someone not in the directory.
    Visitor(Person),
}

pub struct Controller<R, W> {
    manager: Manager,
    console: Console<R, W>,
    user: SessionUser,
    actions: Vec<String>,
    now: Option<NaiveDateTime>,
}

impl<R, W> Controller<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(manager: Manager, console: Console<R, W>) -> Self {
        Self {
            manager,
            console,
            user: SessionUser::Visitor(Person::visitor(None)),
            actions: Vec::new(),
            now: None,
        }
    }

    /// Evaluate days in storage against a fixed instant instead of the clock.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// What the person did this session, oldest first.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Run a whole session. Returns once the person chooses to quit.
    pub fn run(&mut self) -> io::Result<()> {
        self.welcome()?;
        loop {
            match self.console.ask_for_option()? {
                MenuOption::ListItems => self.list_items()?,
                MenuOption::SearchAndOrder => self.search_and_order()?,
                MenuOption::BrowseByCategory => self.browse_by_category()?,
                MenuOption::Quit => return self.quit(),
            }
        }
    }

    fn person(&self) -> Option<&Person> {
        match &self.user {
            SessionUser::Staff(id) => self.manager.person(*id),
            SessionUser::Visitor(person) => Some(person),
        }
    }

    fn user_name(&self) -> String {
        self.person()
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| stockroom_personnel::ANONYMOUS.to_string())
    }

    fn is_employee(&self) -> bool {
        self.person().is_some_and(Person::is_employee)
    }

    fn is_authenticated(&self) -> bool {
        self.person().is_some_and(Person::is_authenticated)
    }

    fn authenticate(&mut self, credential: &str) -> bool {
        match &mut self.user {
            SessionUser::Staff(id) => self.manager.authenticate(*id, credential),
            SessionUser::Visitor(person) => person.authenticate(credential),
        }
    }

    fn welcome(&mut self) -> io::Result<()> {
        let name = self.console.ask_user_name()?;
        self.user = match self.manager.find_person_id(&name) {
            Some(id) => SessionUser::Staff(id),
            None => SessionUser::Visitor(Person::visitor(Some(name))),
        };
        tracing::info!(staff = self.is_employee(), "session started");

        let name = self.user_name();
        let is_employee = self.is_employee();
        self.console.greet(&name, is_employee)
    }

    fn list_items(&mut self) -> io::Result<()> {
        let names = self.manager.unique_item_names();
        let per_warehouse = self.manager.counts_per_warehouse(&names);
        self.console.display_items(&per_warehouse)?;
        self.actions.push("You have listed all items".to_string());
        Ok(())
    }

    fn search_and_order(&mut self) -> io::Result<()> {
        let name = self.console.ask_for_item_name()?;
        let total = self.manager.count_total(&name);
        let now = self.now;
        let locations: Vec<_> = self
            .manager
            .search(&name)
            .into_iter()
            .map(|(warehouse, item)| {
                let days = match now {
                    Some(now) => item.days_in_storage_at(now),
                    None => item.days_in_storage(),
                };
                (warehouse, days)
            })
            .collect();

        self.console.display_search_result(&name, total, &locations)?;
        self.actions.push(format!("You have searched for {name}"));

        if total == 0 {
            return Ok(());
        }
        if !self.wants_to_order()? {
            return self.console.print_order_cancelled();
        }

        let display_name = self.manager.query().canonical_name(&name).unwrap_or_else(|| name.clone());
        let ordered = self.order(&display_name, total)?;
        if ordered == 0 {
            return self.console.print_order_cancelled();
        }

        // Orders are not removed from stock.
        tracing::info!(item = %display_name, amount = ordered, "order placed");
        self.console.print_order(ordered, &display_name)?;
        self.actions.push(format!("You have ordered {ordered} {display_name}"));
        Ok(())
    }

    /// True when the person wants to order and has logged in.
    fn wants_to_order(&mut self) -> io::Result<bool> {
        if !self.console.ask_if_user_wants_to_order()? {
            return Ok(false);
        }
        self.log_in()
    }

    /// Ask for the password until it matches; an empty answer gives up.
    fn log_in(&mut self) -> io::Result<bool> {
        while !self.is_authenticated() {
            let password = self.console.ask_for_password()?;
            if password.is_empty() {
                return Ok(false);
            }
            self.authenticate(&password);
        }
        Ok(true)
    }

    /// Amount to order, or 0 when the person backs out.
    fn order(&mut self, name: &str, available: usize) -> io::Result<usize> {
        let requested = self.console.ask_how_much_to_order()?;
        match plan_order(requested, available) {
            OrderPlan::Nothing => Ok(0),
            OrderPlan::Fulfil(amount) => Ok(amount),
            OrderPlan::ExceedsStock { available, .. } => {
                self.console.print_not_enough_items_in_stock(available, name)?;
                if self.console.ask_if_user_wants_to_order_max_amount(available)? {
                    Ok(available)
                } else {
                    Ok(0)
                }
            }
        }
    }

    fn browse_by_category(&mut self) -> io::Result<()> {
        let numbered = self.manager.query().numbered_categories();
        self.console.display_categories(&numbered)?;

        let choice = self.console.ask_for_number_of_category_to_browse()?;
        let selected = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| numbered.iter().find(|(n, _, _)| *n == number));

        match selected {
            Some((_, category, _)) => {
                let items = self.manager.items_of_category(category);
                self.console.display_all_items_of_category(category, &items)?;
                self.actions.push(format!("You have searched for category: {category}"));
                Ok(())
            }
            None => self.console.print_no_such_category(choice.trim()),
        }
    }

    fn quit(&mut self) -> io::Result<()> {
        tracing::info!(actions = self.actions.len(), "session ended");
        let name = self.user_name();
        let is_employee = self.is_employee();
        self.console.farewell(&name, is_employee, &self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::io::Cursor;

    type TestController = Controller<Cursor<Vec<u8>>, Vec<u8>>;

    fn personnel() -> Vec<Value> {
        vec![json!({
            "user_name": "Tomek",
            "password": "q",
            "head_of": [{"user_name": "Ania", "password": "hunter2", "head_of": []}],
        })]
    }

    fn stock() -> Vec<Value> {
        vec![
            json!({"state": "Black", "category": "Smartwatch", "warehouse": 4, "date_of_stock": "2021-07-20 03:51:06"}),
            json!({"state": "Blue", "category": "Remote control", "warehouse": 3, "date_of_stock": "2020-09-02 07:19:05"}),
            json!({"state": "Blue", "category": "Remote control", "warehouse": 1, "date_of_stock": "2020-06-25 22:45:20"}),
            json!({"state": "Blue", "category": "Remote control", "warehouse": 3, "date_of_stock": "2020-11-07 00:38:09"}),
        ]
    }

    fn session(script: &str) -> TestController {
        let manager = Manager::from_records(personnel(), stock()).unwrap();
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let now = NaiveDate::from_ymd_opt(2021, 8, 19)
            .unwrap()
            .and_hms_opt(9, 13, 20)
            .unwrap();
        Controller::new(manager, console).with_now(now)
    }

    fn printed(controller: &TestController) -> String {
        String::from_utf8(controller.console().output().clone()).unwrap()
    }

    #[test]
    fn visitor_lists_items_and_quits_without_recap() {
        let mut c = session("Krzysiek\n1\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("Hello, Krzysiek!"));
        assert!(out.contains("\nBlue Remote control\n\nTotal amount of item in Warehouse 1: 1\nTotal amount of item in Warehouse 3: 2\n"));
        assert!(out.ends_with("Thank you for your visit, Krzysiek!\n\n"));
        assert_eq!(c.actions(), ["You have listed all items"]);
    }

    #[test]
    fn staff_order_after_login() {
        let mut c = session("Ania\n2\nblue remote control\ny\nwrong\nhunter2\n2\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("\n3 Blue remote control in stock\n"));
        assert!(out.contains("   In Warehouse 1 for 419 days\n"));
        assert!(out.contains("   In Warehouse 3 for 351 days\n"));
        assert_eq!(out.matches("Password or press enter to quit").count(), 2);
        assert!(out.contains("You have ordered 2 Blue Remote control"));
        assert!(out.contains("1. You have searched for blue remote control\n2. You have ordered 2 Blue Remote control\n"));

        let ania = c.manager().find_person("Ania").unwrap();
        assert!(ania.is_authenticated());
    }

    #[test]
    fn without_a_fixed_clock_ages_come_from_local_time() {
        let manager = Manager::from_records(personnel(), stock()).unwrap();
        let console = Console::new(Cursor::new(b"Tomek\n2\nBlack Smartwatch\nn\n4\n".to_vec()), Vec::new());
        let mut c = Controller::new(manager, console);
        c.run().unwrap();

        let expected = c.manager().search("Black Smartwatch")[0].1.days_in_storage();
        assert!(expected > 0);
        assert!(printed(&c).contains(&format!("   In Warehouse 4 for {expected} days\n")));
    }

    #[test]
    fn exceeding_stock_offers_the_maximum() {
        let mut c = session("Tomek\n2\nBlue Remote control\ny\nq\n10\ny\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("There are only 3 Blue Remote control"));
        assert!(out.contains("Do you want to order maximum amount (3)?"));
        assert!(out.contains("You have ordered 3 Blue Remote control"));
    }

    #[test]
    fn declining_the_maximum_cancels() {
        let mut c = session("Tomek\n2\nBlue Remote control\ny\nq\n10\nn\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("Order cancelled"));
        assert!(!out.contains("You have ordered"));
    }

    #[test]
    fn visitors_cannot_log_in_to_order() {
        let mut c = session("Guest\n2\nBlack Smartwatch\ny\nanything\n\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("1 Black smartwatch in stock"));
        assert!(out.contains("Order cancelled"));
        assert_eq!(c.actions(), ["You have searched for Black Smartwatch"]);
    }

    #[test]
    fn search_for_missing_item_skips_ordering() {
        let mut c = session("Tomek\n2\nRed Laptop\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("\nNot in stock\n"));
        assert!(!out.contains("Do you want to order?"));
    }

    #[test]
    fn browse_by_category_lists_items_with_warehouses() {
        let mut c = session("Tomek\n3\n2\n3\n9\n4\n");
        c.run().unwrap();

        let out = printed(&c);
        assert!(out.contains("\n1. Remote control (3)\n2. Smartwatch (1)\n"));
        assert!(out.contains("\nSmartwatch:\nBlack Smartwatch, Warehouse 4\n"));
        assert!(out.contains("No option 9"));
        assert_eq!(c.actions(), ["You have searched for category: Smartwatch"]);
    }

    #[test]
    fn invalid_menu_choice_is_retried() {
        let mut c = session("Tomek\n7\n4\n");
        c.run().unwrap();
        assert!(printed(&c).contains("No option 7"));
    }

    #[test]
    fn closed_input_ends_the_session_with_eof() {
        let mut c = session("Tomek\n1\n");
        let err = c.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(c.actions(), ["You have listed all items"]);
    }
}
