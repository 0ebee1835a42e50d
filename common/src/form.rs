use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use api::{
    admin::{Admin, AdminRole, AdminUuid},
    app::{App, AppUuid},
    broadcast::{Audience, Broadcast},
    category::{Category, CategoryUuid},
    plan::{Plan, PlanUuid},
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_DEVICE_LIMIT: u32 = 50;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_BROADCAST_TITLE_LEN: usize = 120;
pub const MAX_BROADCAST_BODY_LEN: usize = 2000;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

// reverse-domain bundle ids, e.g. com.example.game
static PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$").expect("package regex")
});

// field name -> message, shown next to the offending input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        match self.is_empty() {
            true => Ok(value),
            false => Err(self),
        }
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
    }
}

fn max_len(errors: &mut FieldErrors, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("must be at most {max} characters"));
    }
}

// admin

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminDraft {
    pub admin_uuid: Option<AdminUuid>,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub password: String,
    pub confirm_password: String,
}

impl AdminDraft {
    pub fn new(admin: Option<&Admin>) -> Self {
        match admin {
            Some(admin) => AdminDraft {
                admin_uuid: Some(admin.admin_uuid),
                name: admin.name.clone(),
                email: admin.email.clone(),
                role: admin.role,
                ..Default::default()
            },
            None => AdminDraft::default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.admin_uuid.is_none()
    }

    // new admins need a password, existing ones keep theirs when it is left blank
    pub fn validate(&self) -> Result<(Admin, Option<String>), FieldErrors> {
        let mut errors = FieldErrors::default();

        require(&mut errors, "name", &self.name, "Name");
        if !EMAIL.is_match(self.email.trim()) {
            errors.add("email", "enter a valid email address");
        }

        let password = match (self.password.is_empty(), self.is_new()) {
            (true, true) => {
                errors.add("password", "Password is required");
                None
            }
            (true, false) => None,
            (false, _) => {
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    errors.add(
                        "password",
                        format!("must be at least {MIN_PASSWORD_LEN} characters"),
                    );
                }
                Some(self.password.clone())
            }
        };

        if self.password != self.confirm_password {
            errors.add("confirm_password", "passwords do not match");
        }

        errors.finish((
            Admin {
                admin_uuid: self.admin_uuid.unwrap_or_default(),
                name: self.name.trim().to_owned(),
                email: self.email.trim().to_owned(),
                role: self.role,
            },
            password,
        ))
    }
}

// plan

#[derive(Clone, Debug, PartialEq)]
pub struct PlanDraft {
    pub plan_uuid: Option<PlanUuid>,
    pub name: String,
    pub price: String,
    pub duration_days: String,
    pub device_limit: String,
    pub active: bool,
}

impl Default for PlanDraft {
    fn default() -> Self {
        PlanDraft {
            plan_uuid: None,
            name: String::new(),
            price: String::new(),
            duration_days: String::from("30"),
            device_limit: String::from("1"),
            active: true,
        }
    }
}

impl PlanDraft {
    pub fn new(plan: Option<&Plan>) -> Self {
        match plan {
            Some(plan) => PlanDraft {
                plan_uuid: Some(plan.plan_uuid),
                name: plan.name.clone(),
                price: plan.price(),
                duration_days: plan.duration_days.to_string(),
                device_limit: plan.device_limit.to_string(),
                active: plan.active,
            },
            None => PlanDraft::default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.plan_uuid.is_none()
    }

    pub fn validate(&self) -> Result<Plan, FieldErrors> {
        let mut errors = FieldErrors::default();

        require(&mut errors, "name", &self.name, "Name");

        let price_cents = parse_price(&self.price).unwrap_or_else(|| {
            errors.add("price", "enter a price such as 9.99");
            0
        });

        let duration_days = match self.duration_days.trim().parse::<u32>() {
            Ok(days) if days > 0 => days,
            _ => {
                errors.add("duration_days", "must be a whole number of days");
                0
            }
        };

        let device_limit = match self.device_limit.trim().parse::<u32>() {
            Ok(limit) if (1..=MAX_DEVICE_LIMIT).contains(&limit) => limit,
            _ => {
                errors.add(
                    "device_limit",
                    format!("must be between 1 and {MAX_DEVICE_LIMIT}"),
                );
                0
            }
        };

        errors.finish(Plan {
            plan_uuid: self.plan_uuid.unwrap_or_default(),
            name: self.name.trim().to_owned(),
            price_cents,
            duration_days,
            device_limit,
            active: self.active,
        })
    }
}

// "12", "12.5" and "12.50" are all fine; more than two decimals is not
pub fn parse_price(value: &str) -> Option<u32> {
    let value = value.trim();
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));

    if whole.is_empty()
        || fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let whole: u32 = whole.parse().ok()?;
    let cents: u32 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u32>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(cents)
}

// category

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub category_uuid: Option<CategoryUuid>,
    pub name: String,
    pub description: String,
    pub blocked_by_default: bool,
}

impl CategoryDraft {
    pub fn new(category: Option<&Category>) -> Self {
        match category {
            Some(category) => CategoryDraft {
                category_uuid: Some(category.category_uuid),
                name: category.name.clone(),
                description: category.description.clone(),
                blocked_by_default: category.blocked_by_default,
            },
            None => CategoryDraft::default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.category_uuid.is_none()
    }

    pub fn validate(&self) -> Result<Category, FieldErrors> {
        let mut errors = FieldErrors::default();

        require(&mut errors, "name", &self.name, "Name");
        max_len(&mut errors, "description", &self.description, MAX_DESCRIPTION_LEN);

        errors.finish(Category {
            category_uuid: self.category_uuid.unwrap_or_default(),
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            blocked_by_default: self.blocked_by_default,
        })
    }
}

// app

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppDraft {
    pub app_uuid: Option<AppUuid>,
    pub name: String,
    pub package: String,
    pub category_uuid: Option<CategoryUuid>,
}

impl AppDraft {
    pub fn new(app: Option<&App>) -> Self {
        match app {
            Some(app) => AppDraft {
                app_uuid: Some(app.app_uuid),
                name: app.name.clone(),
                package: app.package.clone(),
                category_uuid: app.category_uuid,
            },
            None => AppDraft::default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.app_uuid.is_none()
    }

    pub fn validate(&self) -> Result<App, FieldErrors> {
        let mut errors = FieldErrors::default();

        require(&mut errors, "name", &self.name, "Name");
        if !PACKAGE.is_match(self.package.trim()) {
            errors.add("package", "expected a bundle id such as com.example.app");
        }

        errors.finish(App {
            app_uuid: self.app_uuid.unwrap_or_default(),
            name: self.name.trim().to_owned(),
            package: self.package.trim().to_owned(),
            category_uuid: self.category_uuid,
        })
    }
}

// broadcast

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BroadcastDraft {
    pub title: String,
    pub body: String,
    pub audience: Audience,
}

impl BroadcastDraft {
    pub fn validate(&self) -> Result<Broadcast, FieldErrors> {
        let mut errors = FieldErrors::default();

        require(&mut errors, "title", &self.title, "Title");
        max_len(&mut errors, "title", &self.title, MAX_BROADCAST_TITLE_LEN);
        require(&mut errors, "body", &self.body, "Message");
        max_len(&mut errors, "body", &self.body, MAX_BROADCAST_BODY_LEN);

        errors.finish(Broadcast {
            title: self.title.trim().to_owned(),
            body: self.body.trim().to_owned(),
            audience: self.audience.clone(),
            ..Default::default()
        })
    }
}

// submit lifecycle of a form modal
//
// a form saves at most once at a time and never again after the backend accepted it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
}

impl SaveState {
    // false when a save is already running or has already succeeded
    pub fn begin(&mut self) -> bool {
        match self {
            SaveState::Idle => {
                *self = SaveState::Saving;
                true
            }
            SaveState::Saving | SaveState::Saved => false,
        }
    }

    pub fn finish(&mut self, saved: bool) {
        *self = match saved {
            true => SaveState::Saved,
            false => SaveState::Idle,
        };
    }

    pub fn is_saving(&self) -> bool {
        *self == SaveState::Saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_admin_needs_name_email_and_password() {
        let errors = AdminDraft::default().validate().unwrap_err();

        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(errors.get("confirm_password").is_none());
    }

    #[test]
    fn existing_admin_keeps_password_when_blank() {
        let admin = Admin {
            admin_uuid: 4,
            name: String::from("Dana"),
            email: String::from("dana@example.com"),
            role: AdminRole::Manager,
        };

        let (validated, password) = AdminDraft::new(Some(&admin)).validate().unwrap();
        assert_eq!(validated, admin);
        assert_eq!(password, None);
    }

    #[test]
    fn admin_password_rules() {
        let mut draft = AdminDraft {
            name: String::from("Sam"),
            email: String::from("sam@example.com"),
            password: String::from("short"),
            confirm_password: String::from("short"),
            ..Default::default()
        };
        assert!(draft.validate().unwrap_err().get("password").is_some());

        draft.password = String::from("long enough");
        assert_eq!(
            draft.validate().unwrap_err().get("confirm_password"),
            Some("passwords do not match")
        );

        draft.confirm_password = draft.password.clone();
        let (_, password) = draft.validate().unwrap();
        assert_eq!(password.as_deref(), Some("long enough"));
    }

    #[test]
    fn price_parsing() {
        assert_eq!(parse_price("12"), Some(1200));
        assert_eq!(parse_price("12.5"), Some(1250));
        assert_eq!(parse_price(" 0.99 "), Some(99));
        assert_eq!(parse_price("12.345"), None);
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price(".50"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn plan_round_trips_through_draft() {
        let plan = Plan {
            plan_uuid: 3,
            name: String::from("Family"),
            price_cents: 1499,
            duration_days: 30,
            device_limit: 6,
            active: true,
        };

        assert_eq!(PlanDraft::new(Some(&plan)).validate().unwrap(), plan);
    }

    #[test]
    fn plan_limits_are_enforced() {
        let draft = PlanDraft {
            name: String::from("Huge"),
            price: String::from("5"),
            duration_days: String::from("0"),
            device_limit: String::from("51"),
            ..Default::default()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("duration_days").is_some());
        assert!(errors.get("device_limit").is_some());
    }

    #[test]
    fn app_package_must_be_reverse_domain() {
        let mut draft = AppDraft {
            name: String::from("Chess"),
            package: String::from("chess"),
            ..Default::default()
        };
        assert!(draft.validate().unwrap_err().get("package").is_some());

        draft.package = String::from("org.lichess.mobile");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn category_description_is_bounded() {
        let draft = CategoryDraft {
            name: String::from("Games"),
            description: "x".repeat(MAX_DESCRIPTION_LEN + 1),
            ..Default::default()
        };

        assert!(draft.validate().unwrap_err().get("description").is_some());
    }

    #[test]
    fn broadcast_requires_title_and_body() {
        let errors = BroadcastDraft::default().validate().unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("body").is_some());

        let broadcast = BroadcastDraft {
            title: String::from(" Maintenance "),
            body: String::from("Sync will pause tonight."),
            audience: Audience::Plan(2),
        }
        .validate()
        .unwrap();

        assert_eq!(broadcast.title, "Maintenance");
        assert_eq!(broadcast.audience, Audience::Plan(2));
        assert_eq!(broadcast.sent, None);
    }

    #[test]
    fn second_submit_is_ignored_while_saving() {
        let mut state = SaveState::default();

        assert!(state.begin());
        assert!(state.is_saving());
        assert!(!state.begin());
        assert_eq!(state, SaveState::Saving);
    }

    #[test]
    fn submit_after_success_is_ignored() {
        let mut state = SaveState::default();
        assert!(state.begin());
        state.finish(true);

        assert!(!state.is_saving());
        assert!(!state.begin());
        assert_eq!(state, SaveState::Saved);
    }

    #[test]
    fn failed_save_can_be_retried() {
        let mut state = SaveState::default();
        assert!(state.begin());
        state.finish(false);

        assert_eq!(state, SaveState::Idle);
        assert!(state.begin());
    }
}
