// Action names recorded in the application log
pub const EVENT_CREATED: &str = "EVENT_CREATED";
pub const EVENT_DELETED: &str = "EVENT_DELETED";
pub const PARTICIPANT_ADDED: &str = "PARTICIPANT_ADDED";
pub const PARTICIPANT_REMOVED: &str = "PARTICIPANT_REMOVED";
pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";
pub const EXPENSE_REMOVED: &str = "EXPENSE_REMOVED";
pub const CATEGORY_ADDED: &str = "CATEGORY_ADDED";
pub const CATEGORY_REMOVED: &str = "CATEGORY_REMOVED";
pub const SUMMARY_QUERIED: &str = "SUMMARY_QUERIED";
pub const EXPENSES_EXPORTED: &str = "EXPENSES_EXPORTED";
pub const DATA_RESET: &str = "DATA_RESET";

// Input limits
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_CATEGORY_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
pub const MAX_AMOUNT: i64 = 1_000_000;
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Categories every event starts with; custom ones are added on top.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Carne",
    "Achuras",
    "Chorizo",
    "Morcilla",
    "Pollo",
    "Bebidas",
    "Vino",
    "Cerveza",
    "Gaseosas",
    "Agua",
    "Carbón",
    "Leña",
    "Encendedor",
    "Verduras",
    "Ensalada",
    "Tomate",
    "Lechuga",
    "Cebolla",
    "Condimentos",
    "Sal",
    "Chimichurri",
    "Salsa criolla",
    "Pan",
    "Postre",
    "Helado",
    "Fruta",
    "Varios",
    "Hielo",
    "Servilletas",
    "Platos",
    "Vasos",
];
