//! Built-in localized strings for every supported language.
//!
//! English is the fallback and must define every key. Other languages may
//! leave keys out; those resolve to English at lookup time. Strings may carry
//! `{placeholder}` tokens that callers fill in; localized strings must keep
//! the same tokens as English (see `TranslationValidator`).

use crate::i18n::{Language, TranslationKey as K};

/// A language's built-in strings as `(key, text)` pairs.
pub type StringTable = &'static [(K, &'static str)];

/// Built-in strings for a language.
pub fn builtin_strings(language: Language) -> StringTable {
    match language {
        Language::Hindi => HINDI_STRINGS,
        Language::English => ENGLISH_STRINGS,
        Language::Bengali => BENGALI_STRINGS,
        Language::Marathi => MARATHI_STRINGS,
        Language::Bhojpuri => BHOJPURI_STRINGS,
        Language::Maithili => MAITHILI_STRINGS,
    }
}

// ==================== English Strings ====================

/// English strings (fallback, complete)
pub const ENGLISH_STRINGS: StringTable = &[
    (K::AppName, "Swasthya Sathi"),
    (K::Home, "Home"),
    (K::SymptomTracker, "Symptom Tracker"),
    (K::HealthTips, "Health Tips"),
    (K::MedicineStore, "Medicine Store"),
    (K::AiAssistant, "AI Assistant"),
    (K::SarkariYojana, "Government Schemes"),
    (K::NearbyHospitals, "Nearby Hospitals"),
    (K::MyProfile, "My Profile"),
    (K::Login, "Login"),
    (K::Register, "Register"),
    (K::Logout, "Logout"),
    (K::Loading, "Loading..."),
    (K::AddSymptom, "Add Symptom"),
    (K::SymptomName, "Symptom Name"),
    (K::SymptomDescription, "Describe your symptom"),
    (K::AddedOn, "Added on"),
    (K::NoSymptoms, "No symptoms recorded yet"),
    (K::EmptySymptomError, "Please enter a symptom"),
    (K::Search, "Search medicines..."),
    (K::AddToCart, "Add to Cart"),
    (K::Cart, "Cart"),
    (K::Checkout, "Checkout"),
    (K::Total, "Total"),
    (K::Address, "Address"),
    (K::Payment, "Payment"),
    (K::ProceedToPayment, "Proceed to Payment"),
    (K::OrderPlaced, "Order Placed"),
    (K::AskHealth, "Ask a health question..."),
    (K::Send, "Send"),
    (K::WelcomeMessage, "Welcome! How can I help you today?"),
    (K::HealthTipsTitle, "Daily Health Tips"),
    (K::GovernmentSchemes, "Government Health Schemes"),
    (K::FreeHealthcare, "Free Healthcare"),
    (K::Schemes, "Schemes"),
    (K::Eligibility, "Eligibility"),
    (K::Apply, "Apply"),
    (K::Email, "Email"),
    (K::Password, "Password"),
    (K::Otp, "OTP"),
    (K::VerifyOtp, "Verify OTP"),
    (K::Name, "Name"),
    (K::Phone, "Phone"),
    (K::SelectLanguage, "Select Language"),
    (K::ChangeLanguage, "Change Language"),
    (K::Price, "Price"),
    (K::Quantity, "Quantity"),
    (K::Remove, "Remove"),
    (K::EmptyCart, "Your cart is empty"),
    (K::ContinueShopping, "Continue Shopping"),
    (K::ViewCart, "View Cart"),
    (K::FullName, "Full Name"),
    (K::StreetAddress, "Street Address"),
    (K::City, "City"),
    (K::Pincode, "Pincode"),
    (K::PaymentMethod, "Payment Method"),
    (K::Cod, "Cash on Delivery"),
    (K::Upi, "UPI"),
    (K::PlaceOrder, "Place Order"),
    (K::OrderSuccess, "Your order has been placed successfully!"),
    (K::BackToHome, "Back to Home"),
    (K::Description, "Description"),
    (K::Date, "Date"),
    (K::Time, "Time"),
    (K::DeleteSymptom, "Delete Symptom"),
    (K::QuickLinks, "Quick Links"),
    (K::Legal, "Legal"),
    (K::PrivacyPolicy, "Privacy Policy"),
    (K::TermsConditions, "Terms & Conditions"),
    (K::Support, "Support"),
    (K::HelpCenter, "Help Center"),
    (K::Feedback, "Feedback"),
    (K::Contact, "Contact"),
    (K::FollowUs, "Follow Us"),
    (K::RightsReserved, "All rights reserved"),
    (K::StoreTagline, "Affordable quality medicines"),
    (K::AllCategories, "All"),
    (K::LoginToAddToCart, "Please login to add items to cart"),
    (K::AddedToCart, "{name} added to cart"),
    (K::CheaperGenericAvailable, "Cheaper Generic Available"),
    (K::Compare, "Compare"),
    (K::PercentOff, "{percent}% OFF"),
];

// ==================== Hindi Strings ====================

/// Hindi strings
pub const HINDI_STRINGS: StringTable = &[
    (K::AppName, "स्वास्थ्य साथी"),
    (K::Home, "होम"),
    (K::SymptomTracker, "लक्षण ट्रैकर"),
    (K::HealthTips, "स्वास्थ्य सुझाव"),
    (K::MedicineStore, "दवा की दुकान"),
    (K::AiAssistant, "एआई सहायक"),
    (K::SarkariYojana, "सरकारी योजना"),
    (K::NearbyHospitals, "नज़दीकी अस्पताल"),
    (K::MyProfile, "मेरी प्रोफ़ाइल"),
    (K::Login, "लॉगिन"),
    (K::Register, "रजिस्टर"),
    (K::Logout, "लॉगआउट"),
    (K::Loading, "लोड हो रहा है..."),
    (K::AddSymptom, "लक्षण जोड़ें"),
    (K::SymptomName, "लक्षण का नाम"),
    (K::SymptomDescription, "अपने लक्षण का वर्णन करें"),
    (K::AddedOn, "जोड़ा गया"),
    (K::NoSymptoms, "अभी तक कोई लक्षण दर्ज नहीं"),
    (K::EmptySymptomError, "कृपया लक्षण दर्ज करें"),
    (K::Search, "दवाइयां खोजें..."),
    (K::AddToCart, "कार्ट में जोड़ें"),
    (K::Cart, "कार्ट"),
    (K::Checkout, "चेकआउट"),
    (K::Total, "कुल"),
    (K::Address, "पता"),
    (K::Payment, "भुगतान"),
    (K::ProceedToPayment, "भुगतान के लिए आगे बढ़ें"),
    (K::OrderPlaced, "ऑर्डर हो गया"),
    (K::AskHealth, "स्वास्थ्य से जुड़ा सवाल पूछें..."),
    (K::Send, "भेजें"),
    (K::WelcomeMessage, "नमस्ते! मैं आपकी कैसे मदद कर सकता हूं?"),
    (K::HealthTipsTitle, "रोज़ाना स्वास्थ्य सुझाव"),
    (K::GovernmentSchemes, "सरकारी स्वास्थ्य योजनाएं"),
    (K::FreeHealthcare, "मुफ़्त इलाज"),
    (K::Schemes, "योजनाएं"),
    (K::Eligibility, "पात्रता"),
    (K::Apply, "आवेदन करें"),
    (K::Email, "ईमेल"),
    (K::Password, "पासवर्ड"),
    (K::Otp, "ओटीपी"),
    (K::VerifyOtp, "ओटीपी सत्यापित करें"),
    (K::Name, "नाम"),
    (K::Phone, "फ़ोन"),
    (K::SelectLanguage, "भाषा चुनें"),
    (K::ChangeLanguage, "भाषा बदलें"),
    (K::Price, "कीमत"),
    (K::Quantity, "मात्रा"),
    (K::Remove, "हटाएं"),
    (K::EmptyCart, "आपका कार्ट खाली है"),
    (K::ContinueShopping, "खरीदारी जारी रखें"),
    (K::ViewCart, "कार्ट देखें"),
    (K::FullName, "पूरा नाम"),
    (K::StreetAddress, "गली का पता"),
    (K::City, "शहर"),
    (K::Pincode, "पिनकोड"),
    (K::PaymentMethod, "भुगतान का तरीका"),
    (K::Cod, "कैश ऑन डिलीवरी"),
    (K::Upi, "यूपीआई"),
    (K::PlaceOrder, "ऑर्डर करें"),
    (K::OrderSuccess, "आपका ऑर्डर सफलतापूर्वक हो गया!"),
    (K::BackToHome, "होम पर वापस जाएं"),
    (K::Description, "विवरण"),
    (K::Date, "तारीख"),
    (K::Time, "समय"),
    (K::DeleteSymptom, "लक्षण हटाएं"),
    (K::QuickLinks, "त्वरित लिंक"),
    (K::Legal, "कानूनी"),
    (K::PrivacyPolicy, "गोपनीयता नीति"),
    (K::TermsConditions, "नियम और शर्तें"),
    (K::Support, "सहायता"),
    (K::HelpCenter, "सहायता केंद्र"),
    (K::Feedback, "प्रतिक्रिया"),
    (K::Contact, "संपर्क"),
    (K::FollowUs, "हमें फ़ॉलो करें"),
    (K::RightsReserved, "सर्वाधिकार सुरक्षित"),
    (K::StoreTagline, "सस्ती और अच्छी गुणवत्ता की दवाइयां"),
    (K::AllCategories, "सभी"),
    (K::LoginToAddToCart, "कार्ट में जोड़ने के लिए कृपया लॉगिन करें"),
    (K::AddedToCart, "{name} कार्ट में जोड़ा गया"),
    (K::CheaperGenericAvailable, "सस्ती जेनेरिक दवा उपलब्ध"),
    (K::Compare, "तुलना करें"),
    (K::PercentOff, "{percent}% छूट"),
];

// ==================== Bengali Strings ====================

/// Bengali strings (partial)
pub const BENGALI_STRINGS: StringTable = &[
    (K::AppName, "স্বাস্থ্য সাথী"),
    (K::Home, "হোম"),
    (K::SymptomTracker, "উপসর্গ ট্র্যাকার"),
    (K::HealthTips, "স্বাস্থ্য টিপস"),
    (K::MedicineStore, "ওষুধের দোকান"),
    (K::AiAssistant, "এআই সহকারী"),
    (K::SarkariYojana, "সরকারি প্রকল্প"),
    (K::NearbyHospitals, "কাছের হাসপাতাল"),
    (K::MyProfile, "আমার প্রোফাইল"),
    (K::Login, "লগইন"),
    (K::Register, "নিবন্ধন"),
    (K::Logout, "লগআউট"),
    (K::Loading, "লোড হচ্ছে..."),
    (K::AddSymptom, "উপসর্গ যোগ করুন"),
    (K::Search, "ওষুধ খুঁজুন..."),
    (K::AddToCart, "কার্টে যোগ করুন"),
    (K::Cart, "কার্ট"),
    (K::Checkout, "চেকআউট"),
    (K::Total, "মোট"),
    (K::Address, "ঠিকানা"),
    (K::Payment, "পেমেন্ট"),
    (K::ProceedToPayment, "পেমেন্টে এগিয়ে যান"),
    (K::OrderPlaced, "অর্ডার সম্পন্ন"),
    (K::Send, "পাঠান"),
    (K::WelcomeMessage, "স্বাগতম! আমি কীভাবে সাহায্য করতে পারি?"),
    (K::Email, "ইমেল"),
    (K::Password, "পাসওয়ার্ড"),
    (K::Name, "নাম"),
    (K::Phone, "ফোন"),
    (K::SelectLanguage, "ভাষা নির্বাচন করুন"),
    (K::ChangeLanguage, "ভাষা পরিবর্তন করুন"),
    (K::Price, "দাম"),
    (K::Quantity, "পরিমাণ"),
    (K::Remove, "সরান"),
    (K::EmptyCart, "আপনার কার্ট খালি"),
    (K::ContinueShopping, "কেনাকাটা চালিয়ে যান"),
    (K::ViewCart, "কার্ট দেখুন"),
    (K::City, "শহর"),
    (K::PlaceOrder, "অর্ডার করুন"),
    (K::BackToHome, "হোমে ফিরে যান"),
    (K::Description, "বিবরণ"),
    (K::Date, "তারিখ"),
    (K::Time, "সময়"),
    (K::Contact, "যোগাযোগ"),
    (K::RightsReserved, "সর্বস্বত্ব সংরক্ষিত"),
    (K::StoreTagline, "সাশ্রয়ী ও মানসম্পন্ন ওষুধ"),
    (K::AddedToCart, "{name} কার্টে যোগ করা হয়েছে"),
    (K::Compare, "তুলনা করুন"),
];

// ==================== Marathi Strings ====================

/// Marathi strings (partial)
pub const MARATHI_STRINGS: StringTable = &[
    (K::AppName, "स्वास्थ्य साथी"),
    (K::Home, "मुख्यपृष्ठ"),
    (K::SymptomTracker, "लक्षण ट्रॅकर"),
    (K::HealthTips, "आरोग्य टिप्स"),
    (K::MedicineStore, "औषध दुकान"),
    (K::AiAssistant, "एआय सहाय्यक"),
    (K::SarkariYojana, "सरकारी योजना"),
    (K::NearbyHospitals, "जवळची रुग्णालये"),
    (K::MyProfile, "माझे प्रोफाइल"),
    (K::Login, "लॉगिन"),
    (K::Register, "नोंदणी"),
    (K::Logout, "लॉगआउट"),
    (K::Loading, "लोड होत आहे..."),
    (K::Search, "औषधे शोधा..."),
    (K::AddToCart, "कार्टमध्ये जोडा"),
    (K::Cart, "कार्ट"),
    (K::Checkout, "चेकआउट"),
    (K::Total, "एकूण"),
    (K::Address, "पत्ता"),
    (K::Payment, "पेमेंट"),
    (K::Send, "पाठवा"),
    (K::Name, "नाव"),
    (K::Phone, "फोन"),
    (K::SelectLanguage, "भाषा निवडा"),
    (K::ChangeLanguage, "भाषा बदला"),
    (K::Price, "किंमत"),
    (K::Quantity, "प्रमाण"),
    (K::Remove, "काढा"),
    (K::EmptyCart, "तुमची कार्ट रिकामी आहे"),
    (K::ViewCart, "कार्ट पहा"),
    (K::City, "शहर"),
    (K::PlaceOrder, "ऑर्डर करा"),
    (K::Description, "वर्णन"),
    (K::Date, "तारीख"),
    (K::Time, "वेळ"),
    (K::Contact, "संपर्क"),
    (K::StoreTagline, "स्वस्त आणि दर्जेदार औषधे"),
    (K::AddedToCart, "{name} कार्टमध्ये जोडले"),
];

// ==================== Bhojpuri Strings ====================

/// Bhojpuri strings (partial)
pub const BHOJPURI_STRINGS: StringTable = &[
    (K::Home, "होम"),
    (K::MedicineStore, "दवाई के दोकान"),
    (K::HealthTips, "सेहत के सुझाव"),
    (K::Login, "लॉगिन"),
    (K::Logout, "लॉगआउट"),
    (K::Loading, "लोड हो रहल बा..."),
    (K::Search, "दवाई खोजीं..."),
    (K::AddToCart, "कार्ट में डालीं"),
    (K::Cart, "कार्ट"),
    (K::Total, "कुल"),
    (K::Address, "पता"),
    (K::Send, "भेजीं"),
    (K::Name, "नाम"),
    (K::SelectLanguage, "भाषा चुनीं"),
    (K::ChangeLanguage, "भाषा बदलीं"),
    (K::Price, "दाम"),
    (K::EmptyCart, "रउआ के कार्ट खाली बा"),
    (K::PlaceOrder, "ऑर्डर करीं"),
    (K::StoreTagline, "सस्ता आ बढ़िया दवाई"),
];

// ==================== Maithili Strings ====================

/// Maithili strings (partial)
pub const MAITHILI_STRINGS: StringTable = &[
    (K::Home, "होम"),
    (K::MedicineStore, "दवाइक दोकान"),
    (K::HealthTips, "स्वास्थ्य सुझाव"),
    (K::Login, "लॉगिन"),
    (K::Logout, "लॉगआउट"),
    (K::Loading, "लोड भ' रहल अछि..."),
    (K::Search, "दवाइ खोजू..."),
    (K::AddToCart, "कार्ट मे जोड़ू"),
    (K::Cart, "कार्ट"),
    (K::Total, "कुल"),
    (K::Address, "पता"),
    (K::Send, "पठाउ"),
    (K::Name, "नाम"),
    (K::SelectLanguage, "भाषा चुनू"),
    (K::ChangeLanguage, "भाषा बदलू"),
    (K::Price, "दाम"),
    (K::EmptyCart, "अहाँक कार्ट खाली अछि"),
    (K::PlaceOrder, "ऑर्डर करू"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keys_of(table: StringTable) -> HashSet<K> {
        table.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn test_english_defines_every_key() {
        let keys = keys_of(ENGLISH_STRINGS);
        for key in K::ALL {
            assert!(keys.contains(key), "English is missing '{}'", key);
        }
    }

    #[test]
    fn test_hindi_defines_every_key() {
        assert_eq!(keys_of(HINDI_STRINGS).len(), K::ALL.len());
    }

    #[test]
    fn test_no_duplicate_keys_in_any_table() {
        for language in Language::ALL {
            let table = builtin_strings(*language);
            assert_eq!(
                keys_of(table).len(),
                table.len(),
                "Duplicate key in {} table",
                language
            );
        }
    }

    #[test]
    fn test_no_empty_builtin_strings() {
        for language in Language::ALL {
            for (key, text) in builtin_strings(*language) {
                assert!(!text.is_empty(), "{} has empty '{}'", language, key);
            }
        }
    }

    #[test]
    fn test_partial_tables_are_partial() {
        assert!(BHOJPURI_STRINGS.len() < K::ALL.len());
        assert!(MAITHILI_STRINGS.len() < K::ALL.len());
        assert!(!keys_of(MAITHILI_STRINGS).contains(&K::StoreTagline));
    }

    #[test]
    fn test_placeholder_strings() {
        assert!(ENGLISH_STRINGS
            .iter()
            .any(|(key, text)| *key == K::AddedToCart && text.contains("{name}")));
        assert!(HINDI_STRINGS
            .iter()
            .any(|(key, text)| *key == K::PercentOff && text.contains("{percent}")));
    }
}
