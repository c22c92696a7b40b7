pub mod tm1637;
