/// Top-level menu choices, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    ListItems,
    SearchAndOrder,
    BrowseByCategory,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::ListItems,
        MenuOption::SearchAndOrder,
        MenuOption::BrowseByCategory,
        MenuOption::Quit,
    ];

    pub fn number(self) -> usize {
        match self {
            MenuOption::ListItems => 1,
            MenuOption::SearchAndOrder => 2,
            MenuOption::BrowseByCategory => 3,
            MenuOption::Quit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::ListItems => "List all items",
            MenuOption::SearchAndOrder => "Search an item and place an order",
            MenuOption::BrowseByCategory => "Browse by category",
            MenuOption::Quit => "Quit",
        }
    }
}

impl core::str::FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        MenuOption::ALL
            .into_iter()
            .find(|option| choice.parse::<usize>() == Ok(option.number()))
            .ok_or_else(|| format!("no option {choice}"))
    }
}
