use crate::lang::{Error, ErrorCode};

/// Language of the host's messages. Programs are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English = 0,
    Kanji = 1,
    Hiragana = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Banner = 0,
    Help,
    Bye,
    NoVariables,
    CompileTime,
    RunTime,
}

const MESSAGES: [[&str; 3]; 6] = [
    [
        "Oto sound language. Type HELP for help, EXIT to leave.",
        "Oto 音響言語。HELP で説明、EXIT で終了します。",
        "おと おんきょうげんご。HELP で せつめい、EXIT で しゅうりょう します。",
    ],
    [
        "Statements: PRINT BEEP PLAY IF LOOP EXIT, name = SOUND, name <- FILTER\n\
         Commands: HELP VARS EXIT",
        "文: PRINT BEEP PLAY IF LOOP EXIT, 名前 = SOUND, 名前 <- フィルタ\n\
         コマンド: HELP VARS EXIT",
        "ぶん: PRINT BEEP PLAY IF LOOP EXIT, なまえ = SOUND, なまえ <- ふぃるた\n\
         こまんど: HELP VARS EXIT",
    ],
    ["Bye.", "終了します。", "しゅうりょう します。"],
    [
        "No variables.",
        "変数はありません。",
        "へんすう は ありません。",
    ],
    ["compile time", "コンパイル時間", "こんぱいる じかん"],
    ["run time", "実行時間", "じっこう じかん"],
];

const ERROR_NAMES: [[&str; 3]; 10] = [
    ["TOO MANY TOKENS", "トークン数超過", "とーくん が おおすぎます"],
    ["LEXICAL ERROR", "字句エラー", "じく えらー"],
    ["COMPILE ERROR", "コンパイルエラー", "こんぱいる えらー"],
    ["ARGUMENT TYPE ERROR", "引数型エラー", "ひきすう の かた が ちがいます"],
    ["MISSING ARGUMENTS", "引数不足", "ひきすう が たりません"],
    ["ARITHMETIC ERROR", "演算エラー", "けいさん えらー"],
    ["INTERNAL ERROR", "内部エラー", "ないぶ えらー"],
    ["FILTER ERROR", "フィルタエラー", "ふぃるた えらー"],
    ["FILE NOT FOUND", "ファイルが見つかりません", "ふぁいる が みつかりません"],
    ["BREAK", "中断", "ちゅうだん"],
];

impl Message {
    pub fn text(self, lang: Language) -> &'static str {
        MESSAGES[self as usize][lang as usize]
    }
}

pub fn error_name(code: ErrorCode, lang: Language) -> &'static str {
    ERROR_NAMES[code as usize - 1][lang as usize]
}

/// Render `error` with its name in `lang`. Location and detail are kept.
pub fn describe(error: &Error, lang: Language) -> String {
    let mut s = error_name(error.code(), lang).to_string();
    let mut suffix = String::new();
    if let Some(line) = error.line_number() {
        suffix.push_str(&format!(" {}", line));
    }
    let column = error.column();
    if column != (0..0) {
        suffix.push_str(&format!(" ({}..{})", column.start, column.end));
    }
    if !suffix.is_empty() {
        s.push_str(" IN");
        s.push_str(&suffix);
    }
    if !error.detail().is_empty() {
        s.push_str(&format!("; {}", error.detail()));
    }
    s
}
