//! Flag registry: static knowledge of curl's command-line flags.

/// Flags that consume the following token as their value.
///
/// Scraped from `man curl`: every option documented with a `<placeholder>`.
pub const PAIRED_FLAGS: &[&str] = &[
    "--abstract-unix-socket",
    "--alt-svc",
    "--aws-sigv4",
    "--cacert",
    "--capath",
    "--cert-type",
    "-E",
    "--cert",
    "--ciphers",
    "-K",
    "--config",
    "--connect-timeout",
    "-C",
    "--continue-at",
    "-c",
    "--cookie-jar",
    "-b",
    "--cookie",
    "--create-file-mode",
    "--crlfile",
    "--curves",
    "--data-ascii",
    "--data-binary",
    "--data-raw",
    "--data-urlencode",
    "-d",
    "--data",
    "--dns-interface",
    "--dns-ipv4-addr",
    "--dns-ipv6-addr",
    "--dns-servers",
    "-D",
    "--dump-header",
    "--egd-file",
    "--engine",
    "--etag-compare",
    "--etag-save",
    "--expect100-timeout",
    "--form-string",
    "-F",
    "--form",
    "--ftp-account",
    "--ftp-alternative-to-user",
    "--ftp-method",
    "-P",
    "--ftp-port",
    "--ftp-ssl-ccc-mode",
    "--happy-eyeballs-timeout-ms",
    "-H",
    "--header",
    "-h",
    "--help",
    "--hostpubmd5",
    "--hostpubsha256",
    "--hsts",
    "--interface",
    "--keepalive-time",
    "--key-type",
    "--key",
    "--krb",
    "--libcurl",
    "--limit-rate",
    "--local-port",
    "--login-options",
    "--mail-auth",
    "--mail-from",
    "--mail-rcpt",
    "--max-filesize",
    "--max-redirs",
    "-m",
    "--max-time",
    "--netrc-file",
    "--noproxy",
    "--oauth2-bearer",
    "--output-dir",
    "-o",
    "--output",
    "--parallel-max",
    "--pass",
    "--pinnedpubkey",
    "--proto-default",
    "--proto-redir",
    "--proto",
    "--proxy-cacert",
    "--proxy-capath",
    "--proxy-cert-type",
    "--proxy-cert",
    "--proxy-ciphers",
    "--proxy-crlfile",
    "--proxy-header",
    "--proxy-key-type",
    "--proxy-key",
    "--proxy-pass",
    "--proxy-pinnedpubkey",
    "--proxy-service-name",
    "--proxy-tls13-ciphers",
    "--proxy-tlsauthtype",
    "--proxy-tlspassword",
    "--proxy-tlsuser",
    "-U",
    "--proxy-user",
    "--proxy1.0",
    "--pubkey",
    "-Q",
    "--quote",
    "--random-file",
    "-r",
    "--range",
    "--request-target",
    "-X",
    "--request",
    "--retry-delay",
    "--retry-max-time",
    "--retry",
    "--sasl-authzid",
    "--service-name",
    "--socks4",
    "--socks4a",
    "--socks5-gssapi-service",
    "--socks5-hostname",
    "--socks5",
    "-Y",
    "--speed-limit",
    "-y",
    "--speed-time",
    "--stderr",
    "-t",
    "--telnet-option",
    "--tftp-blksize",
    "-z",
    "--time-cond",
    "--tls13-ciphers",
    "--tlsauthtype",
    "--tlspassword",
    "--tlsuser",
    "--trace-ascii",
    "--trace",
    "--unix-socket",
    "-T",
    "--upload-file",
    "--url",
    "-A",
    "--user-agent",
    "-u",
    "--user",
    "-w",
    "--write-out",
];

/// Flags the executor always passes itself. User copies are discarded.
pub const FORCED_FLAGS: &[&str] = &["-v", "--verbose", "-s", "--silent"];

/// Flags whose value is an HTTP header line.
pub const HEADER_FLAGS: &[&str] = &["-H", "--header"];

/// How a single token is treated when grouping tokens into units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Stands alone: a value-less flag or a positional argument.
    NoValue,
    /// Consumes the next token as its value (e.g., `-H <header>`).
    RequiresValue,
    /// Forced on by the executor, dropped from user input.
    Forced,
}

/// Look up how `token` is grouped.
pub fn flag_arity(token: &str) -> FlagArity {
    if FORCED_FLAGS.contains(&token) {
        FlagArity::Forced
    } else if PAIRED_FLAGS.contains(&token) {
        FlagArity::RequiresValue
    } else {
        FlagArity::NoValue
    }
}
