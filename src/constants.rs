// DOM contract: ids, classes and data attributes the host page must carry.
// Markup and styling live outside this crate; these names are the whole
// coupling surface.
pub const MAIN_PAGE_ID: &str = "main-page";
pub const FORM_PAGE_ID: &str = "form-page";
pub const BACK_BUTTON_ID: &str = "back-button";
pub const SUBMIT_BUTTON_ID: &str = "submit-button";
pub const CHOICE_FIELD_ID: &str = "selected-choice";
pub const TITLE_FIELD_ID: &str = "vm-title";
pub const DESC_FIELD_ID: &str = "vm-description";
pub const SUBNET_FIELD_ID: &str = "subnet-select";
pub const FLAVOR_FIELD_ID: &str = "flavor-select";

pub const AUTH_BUTTON_CLASS: &str = "auth-button";
pub const CHOICE_CARD_CLASS: &str = "choice-card";
pub const FORM_INPUT_CLASS: &str = "form-input";

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const FOCUSED_CLASS: &str = "focused";

// Theme
pub const LINK_COLOR_VAR: &str = "--tg-link-color";
pub const FALLBACK_LINK_COLOR: &str = "#2481cc";

// Page transition timing. FADE_OUT_MS must stay >= the CSS transition
// duration on the section containers.
pub const FADE_OUT_MS: u32 = 300;
pub const ACTIVATE_DELAY_MS: u32 = 50;

// User-facing strings. The page is Russian, so are the fallbacks.
pub const CHOICE_NOT_SELECTED: &str = "Не выбрано";
pub const LOADING_LABEL: &str = "Загрузка...";
pub const MSG_NO_AUTH_URL: &str = "Сервер не вернул ссылку для авторизации";
pub const MSG_AUTH_FAILED: &str = "Не удалось начать авторизацию";
pub const MSG_PICK_SUBNET_FLAVOR: &str = "Выберите подсеть и конфигурацию";
pub const MSG_TITLE_REQUIRED: &str = "Введите название виртуальной машины";
