/// Speech locale used when a language has no entry of its own.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-EN";

/// Maps a bundle language name to the locale code used for speech output.
pub fn language_code(language: &str) -> &'static str {
    match language {
        "English" => "en-EN",
        "Czech" => "cs-CZ",
        "Danish" => "da-DK",
        "German" => "de-DE",
        "Greek" => "el-GR",
        // Philippine languages fall back to the closest available voice.
        "Spanish" | "Bisaya" | "Ilonggo" | "Tagalog" | "Filipino" => "es-ES",
        "Finnish" => "fi-FI",
        "French" => "fr-FR",
        "Hindi" => "hi-IN",
        "Hungarian" => "hu-HU",
        "Indonesian" => "id-ID",
        "Italian" => "it-IT",
        "Japanese" => "ja-JP",
        "Korean" => "ko-KR",
        "Dutch" => "nl-BE",
        "Norwegian" => "nb-NO",
        "Polish" => "pl-PL",
        "Portuguese" => "pt-PT",
        "Romanian" => "ro-RO",
        "Russian" => "ru-RU",
        "Slovak" => "sk-SK",
        "Swedish" => "sv-SE",
        "Thai" => "th-TH",
        "Turkish" => "tr-TR",
        "Chinese" => "zh-CN",
        _ => DEFAULT_LANGUAGE_CODE,
    }
}
