// thirtyfour (selenium) inputs
pub const RESERVATION_URL: &str = "https://reservation.pc.gc.ca/";

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 900;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

// Fixed query parameters of the campground search results page
pub const MAP_ID: &str = "-2147483535";
pub const SEARCH_TAB_GROUP_ID: &str = "0";
pub const BOOKING_CATEGORY_ID: &str = "0";

// Body-text markers for the signed-in state (English and French UI)
pub const LOGGED_IN_MARKERS: [&str; 3] = ["Sign Out", "My Account", "Déconnexion"];

// Body-text markers for the virtual waiting room
pub const QUEUE_MARKERS: [&str; 4] = [
    "waiting room",
    "salle d'attente",
    "your estimated wait time",
    "you are in line",
];

// HTML selectors for the Angular expansion-panel site list
pub const EXPANSION_PANEL_SELECTOR: &str = "mat-expansion-panel";
pub const PANEL_HEADER_SELECTOR: &str = "mat-expansion-panel-header";
pub const AVAILABILITY_LABEL_SELECTOR: &str = ".availability-label";
pub const VIEW_DETAILS_SELECTOR: &str = ".btn-view-details";
pub const RESOURCE_NAME_SELECTOR: &str = "h3.resource-name";
pub const RESOURCE_ATTR: &str = "data-resource";
pub const AVAILABLE_TEXT: &str = "Available";

// Button / dialog text on the reserve flow
pub const RESERVE_BUTTON: &str = "Reserve";
pub const ACKNOWLEDGE_BUTTON: &str = "Acknowledge";
pub const ACKNOWLEDGE_HEADING: &str = "Please read and acknowledge";
pub const CONFIRM_CHECKBOX_LABEL: &str = "All reservation details are";
pub const CONFIRM_DETAILS_BUTTON: &str = "Confirm reservation details";
