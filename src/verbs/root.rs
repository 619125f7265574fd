use crate::configs::Config;
use crate::container::AppContainer;
use crate::errors::CrossRepoError;
use crate::usecases::ShowRootUseCase;

pub fn execute() -> Result<(), CrossRepoError> {
    let container = AppContainer::new();
    let config = Config::load(&container.fs)?;

    ShowRootUseCase::new(container.ui).execute(&config);
    Ok(())
}
