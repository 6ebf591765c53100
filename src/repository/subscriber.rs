use diesel::prelude::*;

use crate::domain::subscriber::{NewSubscriber, Subscriber};
use crate::domain::types::SubscriberId;
use crate::models::subscriber::{NewSubscriber as DbNewSubscriber, Subscriber as DbSubscriber};
use crate::repository::{DieselRepository, RepositoryResult, SubscriberReader, SubscriberWriter};

impl SubscriberReader for DieselRepository {
    fn list_subscribers(&self) -> RepositoryResult<Vec<Subscriber>> {
        use crate::schema::subscribers;

        let mut conn = self.conn()?;

        let results = subscribers::table
            .order(subscribers::id.asc())
            .select(DbSubscriber::as_select())
            .load::<DbSubscriber>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Subscriber>, _>>()?;

        Ok(results)
    }
}

impl SubscriberWriter for DieselRepository {
    fn create_subscriber(&self, subscriber: &NewSubscriber) -> RepositoryResult<SubscriberId> {
        use crate::schema::subscribers;

        let mut conn = self.conn()?;
        let db_subscriber: DbNewSubscriber = subscriber.clone().into();

        let id = diesel::insert_into(subscribers::table)
            .values(&db_subscriber)
            .returning(subscribers::id)
            .get_result::<i32>(&mut conn)?;

        Ok(SubscriberId::new(id)?)
    }
}
