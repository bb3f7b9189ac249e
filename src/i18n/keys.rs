//! The closed set of translation keys.
//!
//! One macro invocation declares every key once and generates the
//! `TranslationKey` enum, its camelCase names, and a named accessor on
//! [`TranslationView`] per key, so `view.home()` and
//! `service.translate(TranslationKey::Home)` can never disagree.

use crate::i18n::TranslationView;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

macro_rules! translation_keys {
    ($( $variant:ident => $method:ident, $name:literal; )*) => {
        /// A stable identifier for a piece of UI text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TranslationKey {
            $( $variant, )*
        }

        impl TranslationKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [TranslationKey] = &[ $( TranslationKey::$variant, )* ];

            /// The key's camelCase name. Also the identity-fallback text.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( TranslationKey::$variant => $name, )*
                }
            }

            /// Look up a key by its camelCase name.
            pub fn from_name(name: &str) -> Option<TranslationKey> {
                match name {
                    $( $name => Some(TranslationKey::$variant), )*
                    _ => None,
                }
            }
        }

        impl TranslationView {
            $(
                #[doc = concat!("Resolved text for `", $name, "`.")]
                pub fn $method(&self) -> &str {
                    self.get(TranslationKey::$variant)
                }
            )*
        }
    };
}

translation_keys! {
    AppName => app_name, "appName";
    Home => home, "home";
    SymptomTracker => symptom_tracker, "symptomTracker";
    HealthTips => health_tips, "healthTips";
    MedicineStore => medicine_store, "medicineStore";
    AiAssistant => ai_assistant, "aiAssistant";
    SarkariYojana => sarkari_yojana, "sarkariYojana";
    NearbyHospitals => nearby_hospitals, "nearbyHospitals";
    MyProfile => my_profile, "myProfile";
    Login => login, "login";
    Register => register, "register";
    Logout => logout, "logout";
    Loading => loading, "loading";
    AddSymptom => add_symptom, "addSymptom";
    SymptomName => symptom_name, "symptomName";
    SymptomDescription => symptom_description, "symptomDescription";
    AddedOn => added_on, "addedOn";
    NoSymptoms => no_symptoms, "noSymptoms";
    EmptySymptomError => empty_symptom_error, "emptySymptomError";
    Search => search, "search";
    AddToCart => add_to_cart, "addToCart";
    Cart => cart, "cart";
    Checkout => checkout, "checkout";
    Total => total, "total";
    Address => address, "address";
    Payment => payment, "payment";
    ProceedToPayment => proceed_to_payment, "proceedToPayment";
    OrderPlaced => order_placed, "orderPlaced";
    AskHealth => ask_health, "askHealth";
    Send => send, "send";
    WelcomeMessage => welcome_message, "welcomeMessage";
    HealthTipsTitle => health_tips_title, "healthTipsTitle";
    GovernmentSchemes => government_schemes, "governmentSchemes";
    FreeHealthcare => free_healthcare, "freeHealthcare";
    Schemes => schemes, "schemes";
    Eligibility => eligibility, "eligibility";
    Apply => apply, "apply";
    Email => email, "email";
    Password => password, "password";
    Otp => otp, "otp";
    VerifyOtp => verify_otp, "verifyOtp";
    Name => name, "name";
    Phone => phone, "phone";
    SelectLanguage => select_language, "selectLanguage";
    ChangeLanguage => change_language, "changeLanguage";
    Price => price, "price";
    Quantity => quantity, "quantity";
    Remove => remove, "remove";
    EmptyCart => empty_cart, "emptyCart";
    ContinueShopping => continue_shopping, "continueShopping";
    ViewCart => view_cart, "viewCart";
    FullName => full_name, "fullName";
    StreetAddress => street_address, "streetAddress";
    City => city, "city";
    Pincode => pincode, "pincode";
    PaymentMethod => payment_method, "paymentMethod";
    Cod => cod, "cod";
    Upi => upi, "upi";
    PlaceOrder => place_order, "placeOrder";
    OrderSuccess => order_success, "orderSuccess";
    BackToHome => back_to_home, "backToHome";
    Description => description, "description";
    Date => date, "date";
    Time => time, "time";
    DeleteSymptom => delete_symptom, "deleteSymptom";
    QuickLinks => quick_links, "quickLinks";
    Legal => legal, "legal";
    PrivacyPolicy => privacy_policy, "privacyPolicy";
    TermsConditions => terms_conditions, "termsConditions";
    Support => support, "support";
    HelpCenter => help_center, "helpCenter";
    Feedback => feedback, "feedback";
    Contact => contact, "contact";
    FollowUs => follow_us, "followUs";
    RightsReserved => rights_reserved, "rightsReserved";
    // Storefront
    StoreTagline => store_tagline, "storeTagline";
    AllCategories => all_categories, "allCategories";
    LoginToAddToCart => login_to_add_to_cart, "loginToAddToCart";
    AddedToCart => added_to_cart, "addedToCart";
    CheaperGenericAvailable => cheaper_generic_available, "cheaperGenericAvailable";
    Compare => compare, "compare";
    PercentOff => percent_off, "percentOff";
}

impl TranslationKey {
    /// Position of this key in [`TranslationKey::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TranslationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TranslationKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TranslationKey::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown translation key '{}'", name)))
    }
}
