use {
    super::CallErrorPolicy,
    crate::{domain::denom::Denom, infra::evm::view},
    anyhow::{Context, Result},
    serde::Deserialize,
    serde_with::{DisplayFromStr, PickFirst, serde_as},
    std::path::Path,
};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// Prefix that marks a denom as backed by an ERC20 contract.
    #[serde(default = "default_denom_prefix")]
    denom_prefix: String,

    /// Gas cap for every view call. Accepts both numbers and decimal strings.
    #[serde(default = "default_gas_cap")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    gas_cap: u64,

    /// How view calls that fail to execute are treated.
    #[serde(default)]
    call_error_policy: CallErrorPolicy,

    /// Reject boolean return words that are not exactly `0` or `1`.
    #[serde(default)]
    strict_bool_decoding: bool,
}

fn default_denom_prefix() -> String {
    Denom::PREFIX.to_owned()
}

fn default_gas_cap() -> u64 {
    view::DEFAULT_GAS_CAP
}

/// Load the restrictions configuration from a TOML file.
pub fn load(path: &Path) -> Result<super::Config> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    from_toml(&data).with_context(|| format!("invalid config file {path:?}"))
}

/// Parse the restrictions configuration from a TOML string.
pub fn from_toml(data: &str) -> Result<super::Config> {
    let config = toml::de::from_str::<Config>(data).context("TOML syntax error")?;
    let config = super::Config {
        denom_prefix: config.denom_prefix,
        gas_cap: config.gas_cap,
        call_error_policy: config.call_error_policy,
        strict_bool_decoding: config.strict_bool_decoding,
    };
    config.validate()?;
    Ok(config)
}
