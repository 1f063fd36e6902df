//! CLI tool for deploying and driving the token, vault and vesting contracts.

use casper_standards::cep4626::Vault;
use casper_standards::tokens::MintableToken;
use casper_standards::vesting::{ScheduleProvider, Vesting};
use odra::casper_types::U256;
use odra::host::{HostEnv, NoArgs};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the CEP-18 asset used by the vault.
pub struct AssetDeployScript;

impl DeployScript for AssetDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use casper_standards::tokens::MintableTokenInitArgs;

        let _asset = MintableToken::load_or_deploy(
            &env,
            MintableTokenInitArgs {
                name: String::from("Standard Asset"),
                symbol: String::from("SAS"),
                decimals: 9,
            },
            container,
            300_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys a vault over the asset.
/// Requires the asset to be deployed first.
pub struct VaultDeployScript;

impl DeployScript for VaultDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use casper_standards::cep4626::vault::VaultInitArgs;

        let asset = container.contract_ref::<MintableToken>(env)?;
        let _vault = Vault::load_or_deploy(
            &env,
            VaultInitArgs {
                asset: asset.address().clone(),
                decimals_offset: 3,
                name: String::from("Standard Vault Shares"),
                symbol: String::from("vSAS"),
                max_deposit_and_mint: None,
            },
            container,
            450_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the vesting contract and a schedule provider for external schedules.
pub struct VestingDeployScript;

impl DeployScript for VestingDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use casper_standards::vesting::provider::ScheduleProviderInitArgs;

        let _vesting = Vesting::load_or_deploy(&env, NoArgs, container, 400_000_000_000)?;
        let _provider = ScheduleProvider::load_or_deploy(
            &env,
            ScheduleProviderInitArgs {
                // one week cliff, then 90 days
                waiting_duration: 604_800_000,
                vesting_duration: 7_776_000_000,
            },
            container,
            250_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys every contract.
pub struct FullDeployScript;

impl DeployScript for FullDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        AssetDeployScript.deploy(env, container)?;
        VaultDeployScript.deploy(env, container)?;
        VestingDeployScript.deploy(env, container)?;

        Ok(())
    }
}

/// Scenario minting asset tokens. The caller needs the minter role.
pub struct MintAssetScenario;

impl Scenario for MintAssetScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("recipient", "Address receiving the tokens", NamedCLType::Key),
            CommandArg::new("amount", "Amount to mint", NamedCLType::U256),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut asset = container.contract_ref::<MintableToken>(env)?;
        let recipient = args.get_single::<Address>("recipient")?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(50_000_000_000);
        asset.try_mint(recipient, amount)?;

        println!("Minted {} to {:?}", amount, recipient);
        Ok(())
    }
}

impl ScenarioMetadata for MintAssetScenario {
    const NAME: &'static str = "mint-asset";
    const DESCRIPTION: &'static str = "Mints asset tokens to a recipient";
}

/// Scenario approving the vault and depositing assets for the caller.
pub struct VaultDepositScenario;

impl Scenario for VaultDepositScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new("amount", "Assets to deposit", NamedCLType::U256)]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut asset = container.contract_ref::<MintableToken>(env)?;
        let mut vault = container.contract_ref::<Vault>(env)?;
        let amount = args.get_single::<U256>("amount")?;
        let caller = env.caller();

        env.set_gas(50_000_000_000);
        asset.try_approve(vault.address().clone(), amount)?;

        env.set_gas(100_000_000_000);
        let shares = vault.try_deposit(amount, caller)?;

        println!("Deposited {} assets for {} shares", amount, shares);
        Ok(())
    }
}

impl ScenarioMetadata for VaultDepositScenario {
    const NAME: &'static str = "vault-deposit";
    const DESCRIPTION: &'static str = "Approves the vault and deposits assets for the caller";
}

/// Scenario releasing vested tokens. Anyone can release for any receiver.
pub struct VestReleaseScenario;

impl Scenario for VestReleaseScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("receiver", "Account the tokens vest to", NamedCLType::Key),
            CommandArg::new(
                "native",
                "Release native CSPR instead of the asset token",
                NamedCLType::Bool,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut vesting = container.contract_ref::<Vesting>(env)?;
        let receiver = args.get_single::<Address>("receiver")?;
        let asset = if args.get_single::<bool>("native")? {
            None
        } else {
            Some(container.contract_ref::<MintableToken>(env)?.address().clone())
        };

        env.set_gas(150_000_000_000);
        let released = vesting.try_release(receiver, asset)?;

        println!("Released {} to {:?}", released, receiver);
        Ok(())
    }
}

impl ScenarioMetadata for VestReleaseScenario {
    const NAME: &'static str = "vest-release";
    const DESCRIPTION: &'static str = "Releases everything vested so far for a receiver";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for Casper token, vault and vesting contracts")
        // Deploy scripts
        .deploy(AssetDeployScript)
        .deploy(VaultDeployScript)
        .deploy(VestingDeployScript)
        .deploy(FullDeployScript)
        // Contract references
        .contract::<MintableToken>()
        .contract::<Vault>()
        .contract::<Vesting>()
        .contract::<ScheduleProvider>()
        // Scenarios
        .scenario(MintAssetScenario)
        .scenario(VaultDepositScenario)
        .scenario(VestReleaseScenario)
        .build()
        .run();
}
