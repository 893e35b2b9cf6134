/// Top-level menu entries, numbered as shown to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBalance,
    ViewAccount,
    Subscribe,
    Support,
    ChangeNumber,
    Unsubscribe,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddBalance,
        MenuChoice::ViewAccount,
        MenuChoice::Subscribe,
        MenuChoice::Support,
        MenuChoice::ChangeNumber,
        MenuChoice::Unsubscribe,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddBalance   => "Add Balance",
            MenuChoice::ViewAccount  => "View Account",
            MenuChoice::Subscribe    => "Subscribe Package",
            MenuChoice::Support      => "Customer Support",
            MenuChoice::ChangeNumber => "Change Number",
            MenuChoice::Unsubscribe  => "Unsubscribe",
            MenuChoice::Exit         => "Exit",
        }
    }
}

/// Customer support sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportChoice {
    Submit,
    Process,
}

impl SupportChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SupportChoice::Submit),
            "2" => Some(SupportChoice::Process),
            _   => None,
        }
    }
}
