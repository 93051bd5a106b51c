use std::env;

use color_eyre::eyre::Result;
use r_cartlib::{
    storage::{KeyValueListStorage, file::FileKeyValueStore},
    store::{
        Dispatcher, StateGetter, Store, action::Action, reducer::StoreReducer,
    },
    summary::share_message,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let dir = env::temp_dir().join("r-cartlib-weekly-list");
    let storage = KeyValueListStorage::new(FileKeyValueStore::new(&dir));
    let store = Store::new(StoreReducer::boxed(), Box::new(storage));

    store.dispatch(Action::add("Rice", Some("Derica".into()), Some(500.into())));
    store.dispatch(Action::add("Milk", Some("2".into()), Some("300".into())));
    store.dispatch(Action::add("Garri", Some("Paint".into()), None));
    store.dispatch(Action::SaveNamed(Some("Weekly".to_string())));
    store.dispatch(Action::ClearList { confirmed: true });

    println!("cleared list has {} items", store.get_state().items.len());

    store.dispatch(Action::LoadNamed("Weekly".to_string()));

    let state = store.get_state();
    println!("{}", share_message(&state.items, state.total(), "₦"));
    println!("saved lists stored in {}", dir.display());

    Ok(())
}
