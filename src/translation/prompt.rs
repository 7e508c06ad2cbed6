pub const FIXED_AGENT_NAME: &str = "Translator Agent";

pub const URDU_TO_ENGLISH_INSTRUCTION: &str =
    "You are a translator agent. Translate text from Urdu to English.";

pub const FORM_AGENT_NAME: &str = "Translator";

pub const TARGET_LANGUAGE_TEMPLATE: &str = "You are a helpful translator. \
     Please translate the following text from English to {target_language}. \
     Output only the translated text without any explanations.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_instruction(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    TARGET_LANGUAGE_TEMPLATE.replace("{target_language}", target_language)
}

/// Sample text translated when `translator run` is given no input.
pub const SAMPLE_URDU_TEXT: &str = "ہم تہہ دل سے جناب سر علی جواد، سر امین عالم، اور سر ضیاء خان کا شکریہ ادا کرتے ہیں کہ انہوں نے ہمیں ایجنٹک اے آئی جیسے جدید اور مفید موضوع کی تعلیم دی۔ آپ کی محنت، رہنمائی اور خلوصِ نیت ہمارے لیے باعثِ فخر اور علم کا خزانہ ہے۔ اللہ آپ سب کو سلامت رکھے اور مزید کامیابیاں عطا فرمائے۔";
