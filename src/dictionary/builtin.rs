//! Small embedded word lists, used when no compiled dictionary is installed.
//!
//! These are enough to tokenize everyday identifiers. For real projects
//! compile a full word list with `identok dict build`.

use super::word_list::WordList;
use crate::error::Result;

pub const ENGLISH_TAG: &str = "en";
pub const PROGRAMMING_TAG: &str = "programming";

pub const ENGLISH: &[&str] = &[
    // Common function words
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "into", "year", "your", "good",
    "some", "could", "them", "see", "other", "than", "then", "now", "look", "only", "come",
    "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us", "is", "are", "was", "has", "had", "been", "more", "each", "per", "via",
    // Numbers and ordinals
    "three", "four", "five", "six", "seven", "eight", "nine", "ten", "zero", "second", "third",
    "last", "next", "previous", "single", "double", "half", "many", "few", "both", "every",
    // Everyday nouns
    "area", "triangle", "square", "circle", "shape", "point", "line", "panel", "window", "frame",
    "editor", "kit", "tool", "box", "button", "label", "field", "table", "row", "column", "cell",
    "page", "book", "word", "name", "number", "count", "total", "sum", "value", "key", "item",
    "list", "set", "map", "tree", "node", "graph", "edge", "path", "file", "folder", "document",
    "text", "string", "character", "letter", "message", "error", "warning", "result", "reason",
    "state", "status", "mode", "level", "limit", "size", "length", "width", "height", "depth",
    "color", "colour", "image", "picture", "icon", "font", "style", "theme", "layout", "view",
    "model", "control", "controller", "manager", "handler", "listener", "event", "action",
    "task", "job", "queue", "stack", "heap", "pool", "cache", "buffer", "buff", "stream",
    "reader", "writer", "input", "output", "source", "target", "order", "group", "user",
    "account", "person", "customer", "address", "phone", "mail", "date", "month", "week",
    "hour", "minute", "clock", "timer", "money", "price", "cost", "rate", "score", "game",
    "player", "board", "card", "piece", "move", "turn", "round", "team", "world", "city",
    "house", "home", "door", "room", "car", "engine", "wheel", "speed", "power", "energy",
    "light", "sound", "music", "voice", "video", "camera", "screen", "display", "printer",
    "paper", "report", "record", "entry", "index", "position", "location", "place", "region",
    "zone", "range", "scale", "factor", "ratio", "weight", "mass", "force", "angle", "vector",
    "matrix", "array", "element", "member", "part", "component", "module", "package", "unit",
    "system", "service", "server", "client", "request", "response", "session", "connection",
    "channel", "port", "socket", "network", "protocol", "packet", "header", "body", "content",
    "format", "pattern", "rule", "policy", "option", "setting", "config", "property", "attribute",
    "parameter", "argument", "variable", "constant", "type", "kind", "class", "object", "instance",
    "method", "function", "procedure", "routine", "code", "data", "base", "database", "query",
    "filter", "sort", "search", "match", "test", "check", "case", "camel", "snake", "identifier",
    "token", "term", "phrase", "sentence", "language", "dictionary", "vocabulary", "abbreviation",
    "prefix", "suffix", "digit", "upper", "lower", "embedded", "normal", "simple", "something",
    "nothing", "anything", "everything", "default", "custom", "local", "global", "public",
    "private", "static", "final", "abstract", "virtual", "native", "visible", "hidden", "empty",
    "full", "open", "closed", "close", "ready", "busy", "idle", "active", "valid", "invalid",
    "true", "false", "null", "none", "small", "large", "big", "little", "long", "short", "high",
    "low", "old", "young", "early", "late", "fast", "slow", "hot", "cold", "red", "green",
    "blue", "black", "white", "gray", "grey", "left", "right", "top", "bottom", "front",
    "middle", "center", "centre", "inner", "outer", "main", "primary", "secondary", "extra",
    // Everyday verbs
    "add", "remove", "delete", "insert", "update", "create", "destroy", "build", "make",
    "parse", "print", "read", "write", "load", "save", "store", "fetch", "send", "receive",
    "start", "stop", "begin", "end", "run", "execute", "call", "return", "throw", "catch",
    "handle", "process", "convert", "transform", "split", "join", "merge", "copy", "clone",
    "find", "show", "hide", "draw", "paint", "render", "resize", "scroll", "click", "press",
    "release", "select", "clear", "reset", "init", "apply", "accept", "reject", "allow", "deny",
    "enable", "disable", "register", "connect", "disconnect", "wait", "sleep", "notify", "post",
    "put", "push", "pop", "peek", "poll", "offer", "lock", "unlock", "open", "flush", "sync",
    "redo", "undo", "zoom", "scan", "trace", "log", "debug", "sign", "encode", "decode",
    "compare", "equals", "contains", "exists", "is", "has", "can", "should", "must", "may",
    "might", "need", "try", "keep", "hold", "let", "set", "change", "edit", "mark",
];

pub const PROGRAMMING: &[&str] = &[
    "api", "app", "arg", "args", "async", "auth", "bool", "boolean", "byte", "bytes", "char",
    "charset", "cmd", "config", "ctx", "dir", "dto", "enum", "env", "exe", "float", "func",
    "hash", "hashmap", "impl", "int", "integer", "iter", "iterator", "json", "lambda", "len",
    "lib", "linked", "malloc", "max", "min", "msg", "mutex", "num", "obj", "param", "params",
    "ptr", "regex", "repo", "schema", "src", "stdin", "stdout", "stderr", "str", "struct",
    "tmp", "temp", "thread", "tuple", "uri", "url", "util", "utils", "uuid", "var", "void",
    "widget", "xml", "yaml", "getter", "setter", "boilerplate", "runtime", "namespace",
    "callback", "closure", "mixin", "plugin", "wrapper", "adapter", "factory", "singleton",
    "proxy", "builder", "visitor", "iterable", "serializable", "runnable", "comparable",
];

pub const ABBREVIATIONS: &[&str] = &[
    "abbr", "ascii", "awt", "bmp", "cpu", "crc", "css", "csv", "dom", "dns", "eof", "ftp",
    "gif", "gui", "gpu", "html", "http", "https", "id", "ide", "io", "ip", "jdbc", "jdk",
    "jpeg", "jpg", "jre", "jvm", "lhs", "rhs", "nio", "osgi", "pdf", "png", "rgb", "rgba",
    "rpc", "sax", "sdk", "sql", "ssh", "ssl", "svg", "tcp", "tls", "udp", "ui", "url", "uri",
    "usb", "utc", "xml", "xsl", "xslt",
];

pub const DIGIT_ABBREVIATIONS: &[&str] = &[
    "3d", "2d", "ipv4", "ipv6", "utf8", "utf16", "utf32", "md5", "sha1", "sha256", "sha512",
    "base64", "mp3", "mp4", "x509", "i18n", "l10n", "j2ee", "j2se", "j2me", "s3", "ec2", "h2",
    "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64", "float32",
    "float64", "win32", "x86", "x64", "arm64", "p2p", "b2b", "e2e", "oauth2", "http2", "ds9",
];

pub const PREFIXES: &[&str] = &[
    "anti", "auto", "bi", "co", "counter", "de", "dis", "en", "extra", "hyper", "in", "inter",
    "intra", "micro", "mid", "mis", "multi", "non", "over", "post", "pre", "pro", "pseudo",
    "re", "semi", "sub", "super", "trans", "tri", "un", "under",
];

pub const SUFFIXES: &[&str] = &[
    "able", "ible", "al", "ed", "en", "er", "est", "ful", "ic", "ing", "ion", "tion", "ise",
    "ize", "ish", "ism", "ist", "ity", "ive", "less", "ly", "ment", "ness", "or", "ous", "s",
    "es", "y",
];

/// Prefixes rejoined with the following token by prefix concatenation
pub const CONCATENATION_PREFIXES: &[&str] = &["pre", "sub"];

/// The embedded main dictionary: English words plus programming terms
pub fn word_lists() -> Result<Vec<WordList>> {
    Ok(vec![
        WordList::from_words(ENGLISH_TAG, ENGLISH)?,
        WordList::from_words(PROGRAMMING_TAG, PROGRAMMING)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_abbreviations_contain_digits() {
        for entry in DIGIT_ABBREVIATIONS {
            assert!(
                entry.chars().any(|c| c.is_ascii_digit()),
                "{} has no digit",
                entry
            );
        }
    }

    #[test]
    fn test_builtin_word_lists() {
        let lists = word_lists().unwrap();
        assert_eq!(lists.len(), 2);
        assert!(lists[0].is_word("Triangle"));
        assert!(lists[1].is_word("regex"));
        assert_eq!(lists[1].tag(), PROGRAMMING_TAG);
    }
}
