// Bali Document Notation - Rust implementation
//
// Copyright (c) 2025 Bali Notation contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Grammar rules of the notation, keyed by production name.
//!
//! Lowercase names are parser productions, UPPERCASE names are token shapes
//! recognized by the scanner. The table is only consulted when rendering
//! diagnostics, so it is built lazily and never mutated.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("$acceptClause", r#""accept" expression"#),
        ("$annotation", "NOTE | COMMENT"),
        ("$arguments", r#""(" [expression {"," expression}] ")""#),
        ("$arithmeticExpression", r#"expression ("+" | "-" | "*" | "/" | "//") expression"#),
        ("$association", r#"key ":" component"#),
        ("$attribute", r#"variable "[" indices "]""#),
        ("$breakClause", r#""break" "loop""#),
        ("$catalog", r#"association {"," association} | EOL <association EOL> | ":""#),
        ("$chainingExpression", r#"expression "&" expression"#),
        ("$checkoutClause", r#""checkout" recipient ["at" "level" expression] "from" expression"#),
        ("$collection", r#""[" (range | catalog | list) "]""#),
        ("$comparisonExpression", r#"expression ("<" | "=" | ">" | "≠" | "IS" | "MATCHES") expression"#),
        ("$complementExpression", r#""NOT" expression"#),
        ("$component", "entity [context] [annotation]"),
        ("$context", r#""(" parameters ")""#),
        ("$continueClause", r#""continue" "loop""#),
        ("$dereferenceExpression", r#""@" expression"#),
        ("$discardClause", r#""discard" expression"#),
        ("$document", "component [EOL] EOF"),
        ("$element", "ANGLE | BOOLEAN | DURATION | MOMENT | NUMBER | PATTERN | PERCENTAGE | PROBABILITY | RESOURCE | SYMBOL | TAG"),
        ("$endpoint", "ANGLE | BINARY | BOOLEAN | DURATION | MOMENT | MONIKER | PATTERN | PERCENTAGE | PROBABILITY | QUOTE | NUMBER | RESOURCE | SYMBOL | TAG | VERSION"),
        ("$entity", "element | string | collection | procedure"),
        ("$evaluateClause", r#"[recipient (":=" | "+=" | "-=" | "*=" | "/=" | "?=")] expression"#),
        ("$exponentialExpression", r#"expression "^" expression"#),
        ("$expression", "component | intrinsicExpression | variable | precedenceExpression | dereferenceExpression | inversionExpression | magnitudeExpression | complementExpression | invocationExpression | itemExpression | chainingExpression | exponentialExpression | arithmeticExpression | comparisonExpression | logicalExpression"),
        ("$handler", r#"["matching" expression] "do" procedure"#),
        ("$ifClause", r#""if" expression "do" procedure"#),
        ("$indices", r#"expression {"," expression}"#),
        ("$intrinsicExpression", "IDENTIFIER arguments"),
        ("$inversionExpression", r#"("-" | "/" | "*") expression"#),
        ("$invocationExpression", r#"expression ("." | "<-") IDENTIFIER arguments"#),
        ("$itemExpression", r#"expression "[" indices "]""#),
        ("$key", "element | string"),
        ("$list", r#"component {"," component} | EOL <component EOL> | "#),
        ("$logicalExpression", r#"expression ("AND" | "OR" | "SANS" | "XOR") expression"#),
        ("$magnitudeExpression", r#""|" expression "|""#),
        ("$mainClause", "ifClause | selectClause | withClause | whileClause | continueClause | breakClause | returnClause | throwClause | saveClause | discardClause | notarizeClause | checkoutClause | publishClause | postClause | retrieveClause | acceptClause | rejectClause | evaluateClause"),
        ("$notarizeClause", r#""notarize" expression "as" expression"#),
        ("$onClause", r#""on" SYMBOL <handler>"#),
        ("$parameter", r#"SYMBOL ":" component"#),
        ("$parameters", r#"parameter {"," parameter} | EOL <parameter EOL>"#),
        ("$postClause", r#""post" expression "to" expression"#),
        ("$precedenceExpression", r#""(" expression ")""#),
        ("$procedure", r#""{" statements "}""#),
        ("$publishClause", r#""publish" expression"#),
        ("$range", r#"[endpoint] (".." | "..<" | "<.." | "<..<") [endpoint]"#),
        ("$recipient", "SYMBOL | attribute"),
        ("$rejectClause", r#""reject" expression"#),
        ("$retrieveClause", r#""retrieve" recipient "from" expression"#),
        ("$returnClause", r#""return" expression"#),
        ("$saveClause", r#""save" expression "as" recipient"#),
        ("$selectClause", r#""select" expression <"matching" expression "do" procedure>"#),
        ("$statement", "mainClause [onClause] [NOTE]"),
        ("$statements", r#"statement {";" statement} | EOL {(annotation | statement) EOL} | "#),
        ("$string", "BINARY | MONIKER | NARRATIVE | QUOTE | VERSION"),
        ("$throwClause", r#""throw" expression"#),
        ("$variable", "IDENTIFIER"),
        ("$whileClause", r#""while" expression "do" procedure"#),
        ("$withClause", r#""with" "each" SYMBOL "in" expression "do" procedure"#),
        ("$ANGLE", r#""~" (REAL | ZERO)"#),
        ("$BASE32", r#""0".."9" | "A".."D" | "F".."H" | "J".."N" | "P".."T" | "V".."Z""#),
        ("$BINARY", r#""'" {BASE64 | WHITESPACE} "'""#),
        ("$BOOLEAN", r#""false" | "true""#),
        ("$COMMENT", r#""!>" {COMMENT | ~"<!"} "<!""#),
        ("$DELIMITER", r#""<..<" | "<.." | "<-" | "..<" | ".." | ":=" | "/=" | "//" | "-=" | "+=" | "*=" | "?=" | "}" | "|" | "{" | "^" | "]" | "[" | "@" | ">" | "=" | "≠" | "<" | ";" | ":" | "/" | "." | "-" | "," | "+" | "*" | ")" | "(" | "&""#),
        ("$DURATION", r#""~" [SIGN] "P" (TSPAN "W" | [TSPAN "Y"] [TSPAN "M"] [TSPAN "D"] ["T" [TSPAN "H"] [TSPAN "M"] [TSPAN "S"]])"#),
        ("$EOF", "end of input"),
        ("$EOL", r#""\n""#),
        ("$IDENTIFIER", "LETTER {LETTER | DIGIT}"),
        ("$IMAGINARY", r#"[SIGN | REAL] "i""#),
        ("$KEYWORD", r#""accept" | "as" | "at" | "break" | "checkout" | "continue" | "discard" | "do" | "each" | "from" | "if" | "in" | "level" | "loop" | "matching" | "notarize" | "on" | "post" | "publish" | "reject" | "retrieve" | "return" | "save" | "select" | "throw" | "to" | "while" | "with" | "AND" | "IS" | "MATCHES" | "NOT" | "OR" | "SANS" | "XOR""#),
        ("$MOMENT", r#""<" [SIGN] ORDINAL ["-" MONTH ["-" DAY ["T" HOUR [":" MINUTE [":" SECOND [FRACTION]]]]]] ">""#),
        ("$MONIKER", r#"<"/" NAME>"#),
        ("$NARRATIVE", r#""\">" {NARRATIVE | ~"<\""} "<\"""#),
        ("$NOTE", r#""! " {~EOL}"#),
        ("$NUMBER", r#"IMAGINARY | REAL | [SIGN] INFINITY | UNDEFINED | "(" REAL ", " IMAGINARY ")" | "(" REAL " e^" ANGLE "i)""#),
        ("$PATTERN", r#""none" | "any" | "\"" <RUNE> "\"?""#),
        ("$PERCENTAGE", r#"(REAL | ZERO) "%""#),
        ("$PROBABILITY", r#"FRACTION | "1.""#),
        ("$QUOTE", r#""\"" {RUNE} "\"""#),
        ("$REAL", r#"[SIGN] ("e" | "π" | "pi" | "φ" | "phi" | "τ" | "tau" | SCALAR)"#),
        ("$RESOURCE", r##""<" SCHEME ":" ["//" AUTHORITY] PATH ["?" QUERY] ["#" FRAGMENT] ">""##),
        ("$SYMBOL", r#""$" IDENTIFIER"#),
        ("$TAG", r##""#" <BASE32>"##),
        ("$VERSION", r#""v" ORDINAL {"." ORDINAL}"#),
    ])
});

/// Look up the rule text for a production name such as `"$range"`.
pub fn rule(name: &str) -> Option<&'static str> {
    LEXICON.get(name).copied()
}
